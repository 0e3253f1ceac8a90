// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # lcgen: local projects for contest problems
//!
//! Turns crawled programming-contest problems into ready-to-compile C++
//! files: the site's code stub spliced into a template, plus a test harness
//! replaying every worked example.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lcgen::{create_project, CppCodeGen, PreparsedSignatures, ProblemSet};
//!
//! let set = ProblemSet::load("contest.yaml".as_ref())?;
//! let parser = PreparsedSignatures::from(&set);
//! let report = create_project(
//!     "contest".as_ref(),
//!     &set.problems(),
//!     &CppCodeGen::default(),
//!     &parser,
//!     &set.site,
//!     false,
//! )?;
//! for (name, error) in &report.failures {
//!     eprintln!("{}: {}", name, error);
//! }
//! ```
//!
//! ## Problem Kinds
//!
//! - **Simple**: one method on a `Solution` class; each example is one call
//!   checked against the expected output.
//! - **Interactive**: a stateful class; each example is a scenario of
//!   constructor and method calls replayed on a single instance.
//!
//! ## Architecture
//!
//! ```text
//! Problem ──► SignatureParser ──► Signature
//!                                    │
//!                  TestGenerator ◄───┤ (Renderer + statement helpers)
//!                                    ▼
//!            CodeGen::generate_code ──► (solution, tests)
//!                                    │
//!                         Splicer ◄──┘ template sections
//!                                    ▼
//!                     Project ──► A/A.cc, in.txt, CMakeLists.txt, ...
//! ```

// Data model and configuration
pub mod config;
pub mod error;
pub mod parser;
pub mod problem;

// Code generation
pub mod codegen;
pub mod render;
pub mod splice;
pub mod statement;
pub mod templates;
pub mod testgen;

// Output
pub mod project;
pub mod util;

pub use codegen::{CodeGen, CppCodeGen};
pub use config::{DirNaming, GeneratorConfig};
pub use error::{Error, Result};
pub use parser::{PreparsedSignatures, SignatureParser};
pub use problem::{
    Argument, Example, FunctionSignature, Interaction, InteractiveProblemSignature, Problem,
    ProblemEntry, ProblemSet, ProblemSignature, Signature, Value,
};
pub use project::{
    create_project, create_project_single_problem, write_and_backup, Project, ProjectReport,
    WriteOutcome,
};
pub use render::{render, CharPolicy, RenderConfig, Renderer};
pub use splice::{Code, Section, Splicer};
pub use testgen::{generate_tests, TestGenerator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
