//! Generation CLI commands: generate, show

use super::util::{
    first_positional, has_flag, load_config, parse_flag_value, parse_output_arg, write_output,
};
use lcgen::*;
use std::path::{Path, PathBuf};

const USAGE_GENERATE: &str = "Usage: lcgen generate <problems.yaml> [--output DIR] [--config FILE] [--single [--problem NAME]] [--debug]";
const USAGE_SHOW: &str = "Usage: lcgen show <problems.yaml> [--problem NAME] [--config FILE]";

/// Problem set from the first positional argument
///
/// Signatures are validated per problem during generation, so one broken
/// problem does not stop the others.
fn load_problem_set(args: &[String], usage: &str) -> Result<ProblemSet> {
    let path = first_positional(args).ok_or_else(|| Error::Other(usage.to_string()))?;
    let set = ProblemSet::load(Path::new(path))?;
    tracing::debug!(file = path, problems = set.problems.len(), "loaded problem set");
    Ok(set)
}

/// Problems selected by `--problem`, or all of them
fn select_problems(set: &ProblemSet, args: &[String]) -> Result<Vec<Problem>> {
    match parse_flag_value(args, "--problem", "-p") {
        Some(name) => set
            .find(name)
            .map(|entry| vec![entry.problem.clone()])
            .ok_or_else(|| Error::Other(format!("Problem '{}' not in problem set", name))),
        None => Ok(set.problems()),
    }
}

pub fn cmd_generate(args: &[String]) -> Result<()> {
    let set = load_problem_set(args, USAGE_GENERATE)?;
    let config = load_config(args)?;
    let codegen = CppCodeGen::from_config(config.clone())?;
    let parser = PreparsedSignatures::from(&set);
    let output = parse_output_arg(args).unwrap_or_else(|| PathBuf::from("."));

    let project = Project::new(&codegen, &parser, &set.site)
        .with_dir_naming(config.dir_naming)
        .with_statements(config.statements)
        .with_debug(has_flag(args, "--debug"));

    if has_flag(args, "--single") {
        let problems = select_problems(&set, args)?;
        let problem = match problems.as_slice() {
            [problem] => problem,
            _ => return Err("--single needs exactly one problem; use --problem NAME".into()),
        };
        let path = project.create_single(&output, problem)?;
        eprintln!("Written to: {}", path.display());
        return Ok(());
    }

    let report = project.create(&output, &select_problems(&set, args)?)?;
    eprintln!(
        "Generated {} problem(s) in {}",
        report.generated.len(),
        output.display()
    );
    if report.is_success() {
        Ok(())
    } else {
        for (name, error) in &report.failures {
            eprintln!("  ✗ {}: {}", name, error);
        }
        Err(format!("{} problem(s) failed", report.failures.len()).into())
    }
}

pub fn cmd_show(args: &[String]) -> Result<()> {
    let set = load_problem_set(args, USAGE_SHOW)?;
    let config = load_config(args)?;
    let codegen = CppCodeGen::from_config(config.clone())?;
    let parser = PreparsedSignatures::from(&set);
    let project = Project::new(&codegen, &parser, &set.site).with_statements(config.statements);

    let template = codegen.prepared_template()?;
    let mut files = Vec::new();
    for problem in select_problems(&set, args)? {
        let code = project.problem_code(&template, &problem)?;
        files.push(code.join("\n"));
    }
    write_output(&parse_output_arg(args), &files.join("\n\n"))
}
