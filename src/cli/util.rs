//! CLI utility helpers

use lcgen::config::CONFIG_FILE;
use lcgen::{Error, GeneratorConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Value following `--name` or its short form
pub fn parse_flag_value<'a>(args: &'a [String], long: &str, short: &str) -> Option<&'a str> {
    for (i, arg) in args.iter().enumerate() {
        if arg == long || arg == short {
            if let Some(value) = args.get(i + 1) {
                return Some(value.as_str());
            }
        }
    }
    None
}

/// Whether a boolean flag is present
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// First argument that is neither a flag nor a flag's value
pub fn first_positional(args: &[String]) -> Option<&str> {
    const WITH_VALUE: &[&str] = &["--output", "-o", "--config", "-c", "--problem", "-p"];
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
            continue;
        }
        if WITH_VALUE.contains(&arg.as_str()) {
            skip = true;
            continue;
        }
        if !arg.starts_with('-') {
            return Some(arg);
        }
    }
    None
}

/// Parse --output argument to determine output path
pub fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    parse_flag_value(args, "--output", "-o").map(PathBuf::from)
}

/// Configuration from `--config`, else `lcgen.yaml` in the working
/// directory, else defaults
pub fn load_config(args: &[String]) -> Result<GeneratorConfig> {
    if let Some(path) = parse_flag_value(args, "--config", "-c") {
        return GeneratorConfig::load(Path::new(path));
    }
    let current_dir = std::env::current_dir().map_err(Error::Io)?;
    match GeneratorConfig::load_from_dir(&current_dir)? {
        Some(config) => {
            tracing::debug!(file = CONFIG_FILE, "using configuration");
            Ok(config)
        }
        None => Ok(GeneratorConfig::default()),
    }
}

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flag_value() {
        let a = args(&["p.yaml", "-o", "out", "--problem", "Two Sum"]);
        assert_eq!(parse_flag_value(&a, "--output", "-o"), Some("out"));
        assert_eq!(parse_flag_value(&a, "--problem", "-p"), Some("Two Sum"));
        assert_eq!(parse_flag_value(&a, "--config", "-c"), None);
    }

    #[test]
    fn test_first_positional_skips_flag_values() {
        let a = args(&["--output", "out", "--debug", "p.yaml"]);
        assert_eq!(first_positional(&a), Some("p.yaml"));
        assert_eq!(first_positional(&args(&["--debug"])), None);
    }
}
