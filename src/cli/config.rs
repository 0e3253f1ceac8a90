//! Template and schema CLI commands

use super::util::{load_config, parse_output_arg, write_output};
use lcgen::*;

pub fn cmd_template(args: &[String]) -> Result<()> {
    let codegen = CppCodeGen::from_config(load_config(args)?)?;
    let template = codegen.prepared_template()?;
    write_output(&parse_output_arg(args), &template.join("\n"))
}

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("problems");

    match schema_name {
        "list" => {
            println!("Available schemas: problems, config");
            Ok(())
        }
        "problems" => print_schema::<ProblemSet>(),
        "config" => print_schema::<GeneratorConfig>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
