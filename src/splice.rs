//! Template section splicing
//!
//! Templates mark replaceable regions with comment lines:
//!
//! ```text
//! // BEGIN SOLUTION CLASS
//! ...
//! // END SOLUTION CLASS
//! ```
//!
//! Splicing replaces the whole region, markers included, with generated
//! code. Sections are processed in caller order against the output of the
//! previous replacement, so nested regions must be spliced innermost-first
//! in a separate, earlier call.

use crate::error::{Error, Result};
use std::fmt;

/// Source code as a sequence of lines
pub type Code = Vec<String>;

/// Split text into lines
pub fn to_code(text: &str) -> Code {
    text.split('\n').map(str::to_string).collect()
}

/// Section names understood by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    SolutionClass,
    Submit,
    UserTemplate,
    Test,
    Statements,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::SolutionClass => "SOLUTION CLASS",
            Section::Submit => "SUBMIT",
            Section::UserTemplate => "USER TEMPLATE",
            Section::Test => "TEST",
            Section::Statements => "STATEMENTS",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Marker syntax and error reporting for one generator
#[derive(Debug, Clone)]
pub struct Splicer<'a> {
    /// Line comment symbol, e.g. `//`
    pub comment: &'a str,
    /// Generator name reported in errors
    pub generator: &'a str,
}

impl<'a> Splicer<'a> {
    pub fn new(comment: &'a str, generator: &'a str) -> Self {
        Self { comment, generator }
    }

    pub fn begin_marker(&self, section: &str) -> String {
        format!("{} BEGIN {}", self.comment, section)
    }

    pub fn end_marker(&self, section: &str) -> String {
        format!("{} END {}", self.comment, section)
    }

    /// Inclusive line range of a section, markers included
    pub fn find(&self, code: &[String], section: &str) -> Option<(usize, usize)> {
        let begin = self.begin_marker(section);
        let end = self.end_marker(section);
        let start = code.iter().position(|line| *line == begin)?;
        let stop = code[start + 1..]
            .iter()
            .position(|line| *line == end)
            .map(|offset| start + 1 + offset)?;
        Some((start, stop))
    }

    /// Lines strictly between a section's markers
    pub fn body<'c>(&self, code: &'c [String], section: &str) -> Option<&'c [String]> {
        self.find(code, section)
            .map(|(start, stop)| &code[start + 1..stop])
    }

    /// Replace each named section with its code, in the given order
    ///
    /// A missing marker is an error unless `ignore_errors` is set, in which
    /// case that section is skipped.
    pub fn replace<S: AsRef<str>>(
        &self,
        code: &[String],
        sections: &[(S, Code)],
        ignore_errors: bool,
    ) -> Result<Code> {
        let mut out = code.to_vec();
        for (name, replacement) in sections {
            let name = name.as_ref();
            match self.find(&out, name) {
                Some((start, stop)) => {
                    tracing::debug!(section = name, lines = replacement.len(), "splicing section");
                    out.splice(start..=stop, replacement.iter().cloned());
                }
                None if ignore_errors => {
                    tracing::debug!(section = name, "section not in template, skipped");
                }
                None => {
                    return Err(Error::MissingSection {
                        section: name.to_string(),
                        generator: self.generator.to_string(),
                    })
                }
            }
        }
        Ok(out)
    }
}
