//! lcgen CLI - Command-line interface
//!
//! Commands:
//!   generate - Write a project for a problem set
//!   show     - Print generated code for problems
//!   template - Print the effective template
//!   schema   - Print the problem-set JSON schema

mod cli;

use lcgen::{Result, VERSION};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
const LOG_ENV: &str = "LCGEN_LOG";

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result: Result<()> = match args[1].as_str() {
        "generate" | "gen" => cli::cmd_generate(&args[2..]),
        "show" => cli::cmd_show(&args[2..]),
        "template" => cli::cmd_template(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("lcgen {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn print_usage() {
    println!(
        r#"
lcgen - Local projects for contest problems

USAGE:
    lcgen <COMMAND> [OPTIONS]

COMMANDS:
    generate <problems.yaml>          Write a project with one directory per problem
    show <problems.yaml>              Print generated code to stdout
    template                          Print the template with the user template spliced in
    schema                            Print the problem-set JSON schema
    version                           Print the version

OPTIONS:
    --output, -o <dir|file>           Project directory (generate) or output file
    --config, -c <lcgen.yaml>         Generator configuration (default: ./lcgen.yaml)
    --problem, -p <name>              Only this problem (show, generate --single)
    --single                          Write one problem flat into the output directory
    --debug                           Stop at the first failing problem

ENVIRONMENT:
    LCGEN_LOG                         Log filter, e.g. debug or lcgen=trace (default: info)

EXAMPLES:
    lcgen generate weekly-300.yaml --output weekly-300
    lcgen generate problems.yaml --single --problem "Two Sum" -o two-sum
    lcgen show problems.yaml --problem "LRU Cache"
    lcgen schema > problem-set.schema.json
"#
    );
}
