//! Interactive protocol: a stateful class driven through call scenarios

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::problem::{FunctionSignature, Interaction, InteractiveProblemSignature};
use crate::render::types::remove_cv_ref;
use crate::render::Renderer;
use crate::splice::Code;
use crate::statement::{assign, call, ctor, decl_assign, decl_many, method_call, reconstruct};

use super::{function_block, report, test_function_name, ACTUAL, EXPECTED, INSTANCE};

pub(super) fn generate(
    renderer: &Renderer,
    sig: &InteractiveProblemSignature,
) -> Result<(Vec<Code>, Code)> {
    let vars = Variables::new(&sig.functions);

    let functions = sig
        .examples
        .iter()
        .enumerate()
        .map(|(idx, scenario)| ScenarioWriter::new(renderer, sig, &vars).write(idx, scenario))
        .collect::<Result<Vec<_>>>()?;

    let body = (0..sig.examples.len())
        .map(|idx| format!("{};", call(&test_function_name(idx), &[] as &[&str])))
        .collect();
    let driver = function_block("int main()".to_string(), body);

    Ok((functions, driver))
}

/// Local variable names for every method argument of the class
///
/// Arguments share one variable per name. A name declared with different
/// types by different methods is qualified as `<function>_<arg>` instead,
/// with a numeric suffix if that name is already an argument name.
struct Variables {
    names: HashMap<(String, String), String>,
    /// (type, names) in first-appearance order
    declarations: Vec<(String, Vec<String>)>,
}

impl Variables {
    fn new(functions: &[FunctionSignature]) -> Self {
        let mut types: HashMap<&str, HashSet<&str>> = HashMap::new();
        for func in functions {
            for arg in &func.arguments {
                types
                    .entry(arg.name.as_str())
                    .or_default()
                    .insert(remove_cv_ref(&arg.typ));
            }
        }

        let mut taken: HashSet<String> = types.keys().map(|name| name.to_string()).collect();
        let mut names = HashMap::new();
        let mut declared = HashSet::new();
        let mut declarations: Vec<(String, Vec<String>)> = Vec::new();
        for func in functions {
            for arg in &func.arguments {
                let var = if types[arg.name.as_str()].len() > 1 {
                    let base = format!("{}_{}", func.name, arg.name);
                    let mut var = base.clone();
                    let mut n = 2;
                    while taken.contains(&var) {
                        var = format!("{}_{}", base, n);
                        n += 1;
                    }
                    taken.insert(var.clone());
                    var
                } else {
                    arg.name.clone()
                };
                names.insert((func.name.clone(), arg.name.clone()), var.clone());

                if !declared.insert(var.clone()) {
                    continue;
                }
                let ty = remove_cv_ref(&arg.typ).to_string();
                match declarations.iter_mut().find(|(t, _)| *t == ty) {
                    Some((_, vars)) => vars.push(var),
                    None => declarations.push((ty, vec![var])),
                }
            }
        }

        Self {
            names,
            declarations,
        }
    }

    fn name<'s>(&'s self, func: &FunctionSignature, arg: &'s str) -> &'s str {
        self.names
            .get(&(func.name.clone(), arg.to_string()))
            .map(String::as_str)
            .unwrap_or(arg)
    }

    fn declaration_lines(&self) -> Vec<String> {
        self.declarations
            .iter()
            .map(|(ty, vars)| decl_many(ty, vars))
            .collect()
    }
}

struct ScenarioWriter<'a> {
    renderer: &'a Renderer,
    sig: &'a InteractiveProblemSignature,
    vars: &'a Variables,
    constructed: bool,
}

impl<'a> ScenarioWriter<'a> {
    fn new(
        renderer: &'a Renderer,
        sig: &'a InteractiveProblemSignature,
        vars: &'a Variables,
    ) -> Self {
        Self {
            renderer,
            sig,
            vars,
            constructed: false,
        }
    }

    fn write(mut self, idx: usize, scenario: &[Interaction]) -> Result<Code> {
        let mut body = self.vars.declaration_lines();
        for (step, interaction) in scenario.iter().enumerate() {
            body.extend(self.interaction(idx, step, interaction)?);
        }
        let header = format!("void {}()", test_function_name(idx));
        Ok(function_block(header, body))
    }

    fn interaction(
        &mut self,
        idx: usize,
        step: usize,
        interaction: &Interaction,
    ) -> Result<Vec<String>> {
        let (sig, vars) = (self.sig, self.vars);
        let func = sig.function(&interaction.function)?;
        let mut lines = self.assign_arguments(func, interaction)?;
        let args = func
            .arguments
            .iter()
            .map(|a| vars.name(func, &a.name))
            .collect::<Vec<_>>();

        if func.name == self.sig.class_name {
            let line = if self.constructed {
                reconstruct(&self.sig.class_name, INSTANCE, &args)
            } else {
                ctor(&self.sig.class_name, INSTANCE, &args)
            };
            self.constructed = true;
            lines.push(line);
            return Ok(lines);
        }

        if !self.constructed {
            return Err(Error::NotConstructed {
                function: func.name.clone(),
                class: self.sig.class_name.clone(),
            });
        }

        let invocation = method_call(INSTANCE, &func.name, &args);
        if func.is_void() {
            lines.push(format!("{};", invocation));
            return Ok(lines);
        }

        let output = interaction
            .output
            .as_ref()
            .ok_or_else(|| Error::MissingOutput {
                function: func.name.clone(),
            })?;
        let expected = format!("{}{}", EXPECTED, step);
        let actual = format!("{}{}", ACTUAL, step);
        lines.push(decl_assign(
            &func.return_type,
            &expected,
            &self.renderer.render(output, &func.return_type)?,
        ));
        lines.push(decl_assign(&func.return_type, &actual, &invocation));
        lines.push(report(
            self.renderer,
            &format!("Example - {} - Interaction {}", idx, step),
            &expected,
            &actual,
        )?);
        Ok(lines)
    }

    /// Arguments are declared up front, so each call only assigns
    fn assign_arguments(
        &self,
        func: &FunctionSignature,
        interaction: &Interaction,
    ) -> Result<Vec<String>> {
        func.arguments
            .iter()
            .map(|arg| {
                let value = interaction
                    .input
                    .get(&arg.name)
                    .ok_or_else(|| Error::MissingInput {
                        function: func.name.clone(),
                        argument: arg.name.clone(),
                    })?;
                Ok(assign(
                    self.vars.name(func, &arg.name),
                    &self.renderer.render(value, &arg.typ)?,
                ))
            })
            .collect()
    }
}
