//! Simple protocol: one pure method, one test function per example

use crate::error::{Error, Result};
use crate::problem::{Example, FunctionSignature, ProblemSignature};
use crate::render::Renderer;
use crate::splice::Code;
use crate::statement::{call, ctor, decl_assign, method_call};

use super::{function_block, report, test_function_name, ACTUAL, EXPECTED, INSTANCE};

pub(super) fn generate(renderer: &Renderer, sig: &ProblemSignature) -> Result<(Vec<Code>, Code)> {
    let functions = sig
        .examples
        .iter()
        .enumerate()
        .map(|(idx, example)| example_function(renderer, sig, idx, example))
        .collect::<Result<Vec<_>>>()?;

    let mut body = vec![ctor(&sig.class_name, INSTANCE, &[] as &[&str])];
    body.extend(
        (0..sig.examples.len())
            .map(|idx| format!("{};", call(&test_function_name(idx), &[INSTANCE]))),
    );
    let driver = function_block("int main()".to_string(), body);

    Ok((functions, driver))
}

fn example_function(
    renderer: &Renderer,
    sig: &ProblemSignature,
    idx: usize,
    example: &Example,
) -> Result<Code> {
    let func = &sig.function;
    let mut body = declare_arguments(renderer, func, example)?;
    let args = func.argument_names();
    let label = format!("Example - {}", idx);

    if func.is_void() {
        body.extend(in_place(renderer, func, example, &args, &label)?);
    } else {
        body.push(decl_assign(
            &func.return_type,
            EXPECTED,
            &renderer.render(&example.output, &func.return_type)?,
        ));
        body.push(decl_assign(
            &func.return_type,
            ACTUAL,
            &method_call(INSTANCE, &func.name, &args),
        ));
        body.push(report(renderer, &label, EXPECTED, ACTUAL)?);
    }

    let header = format!(
        "void {}({} &{})",
        test_function_name(idx),
        sig.class_name,
        INSTANCE
    );
    Ok(function_block(header, body))
}

/// `T arg = value;` for every argument, in call-site order
fn declare_arguments(
    renderer: &Renderer,
    func: &FunctionSignature,
    example: &Example,
) -> Result<Vec<String>> {
    func.arguments
        .iter()
        .map(|arg| {
            let value = example
                .input
                .get(&arg.name)
                .ok_or_else(|| Error::MissingInput {
                    function: func.name.clone(),
                    argument: arg.name.clone(),
                })?;
            Ok(decl_assign(&arg.typ, &arg.name, &renderer.render(value, &arg.typ)?))
        })
        .collect()
}

/// Void methods modify their first argument; compare it after the call
fn in_place(
    renderer: &Renderer,
    func: &FunctionSignature,
    example: &Example,
    args: &[&str],
    label: &str,
) -> Result<Vec<String>> {
    let invoke = format!("{};", method_call(INSTANCE, &func.name, args));
    let Some(target) = func.arguments.first() else {
        return Ok(vec![invoke]);
    };

    Ok(vec![
        decl_assign(
            &target.typ,
            EXPECTED,
            &renderer.render(&example.output, &target.typ)?,
        ),
        invoke,
        report(renderer, label, EXPECTED, &target.name)?,
    ])
}
