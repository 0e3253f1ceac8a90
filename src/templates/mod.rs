//! Embedded templates and supporting files
//!
//! Everything the C++ backend writes verbatim is compiled into the binary
//! from `templates/cpp/`. The build descriptor is rendered with MiniJinja.

use minijinja::{context, Environment};
use serde::Serialize;
use std::sync::OnceLock;

use crate::error::Result;

// Embedded templates (compiled into binary)
pub mod embedded {
    /// Per-problem file template with section markers
    pub const CPP_TEMPLATE: &str = include_str!("../../templates/cpp/template.cc");
    /// Snippets spliced into every submission
    pub const CPP_USER_TEMPLATE: &str = include_str!("../../templates/cpp/user_template.cc");
    /// Comparison and printing helpers used by generated tests
    pub const CPP_TESTING: &str = include_str!("../../templates/cpp/_testing.h");
    /// Node types and runtime tree/list builders
    pub const CPP_BOILERPLATE: &str = include_str!("../../templates/cpp/_boilerplate.hpp");
    /// Rewrites `[...]` array literals in `in.txt` into `{...}`
    pub const TRANSFORMER: &str = include_str!("../../templates/cpp/transformer.py");
    /// CMake build descriptor
    pub const CMAKE: &str = include_str!("../../templates/cpp/CMakeLists.txt.jinja");
}

const CMAKE_TEMPLATE: &str = "CMakeLists.txt";

/// Template engine singleton
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

fn init_engine() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_template(CMAKE_TEMPLATE, embedded::CMAKE)
        .expect("Failed to load CMake template");
    env
}

/// Get the global template engine
pub fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(init_engine)
}

/// One executable in the build descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildTarget {
    pub name: String,
    pub file: String,
}

impl BuildTarget {
    /// Target named after the file stem: `A/A.cc` builds `A`
    pub fn from_file(file: &str) -> Self {
        let base = file.rsplit('/').next().unwrap_or(file);
        let name = match base.rfind('.') {
            Some(dot) if dot > 0 => &base[..dot],
            _ => base,
        };
        Self {
            name: name.to_string(),
            file: file.to_string(),
        }
    }
}

/// Render `CMakeLists.txt` with one executable per problem file, in order
pub fn render_cmake(project: &str, files: &[String]) -> Result<String> {
    let targets: Vec<BuildTarget> = files.iter().map(|f| BuildTarget::from_file(f)).collect();
    let template = engine().get_template(CMAKE_TEMPLATE)?;
    Ok(template.render(context! { project => project, targets => targets })?)
}
