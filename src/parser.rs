//! Signature parsing seam
//!
//! Turning a problem's code stub and examples into a [`Signature`] is the
//! job of an upstream parser. Generation only depends on this trait; the
//! CLI uses [`PreparsedSignatures`] built from a problem-set document.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::problem::{Problem, ProblemSet, Signature};

/// Source of signatures for problems
pub trait SignatureParser {
    /// Signature of `problem` as published on `site`
    fn parse(&self, problem: &Problem, site: &str) -> Result<Signature>;
}

/// Signatures supplied ahead of time, looked up by problem name
#[derive(Debug, Clone, Default)]
pub struct PreparsedSignatures {
    signatures: HashMap<String, Signature>,
}

impl PreparsedSignatures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, signature: Signature) {
        self.signatures.insert(name.into(), signature);
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl From<&ProblemSet> for PreparsedSignatures {
    fn from(set: &ProblemSet) -> Self {
        let signatures = set
            .problems
            .iter()
            .map(|entry| (entry.problem.name.clone(), entry.signature.clone()))
            .collect();
        Self { signatures }
    }
}

impl SignatureParser for PreparsedSignatures {
    fn parse(&self, problem: &Problem, _site: &str) -> Result<Signature> {
        self.signatures
            .get(&problem.name)
            .cloned()
            .ok_or_else(|| Error::SignatureNotFound(problem.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{FunctionSignature, ProblemSignature};

    fn signature() -> Signature {
        ProblemSignature {
            class_name: "Solution".into(),
            function: FunctionSignature::new("solve", "int", vec![]),
            examples: vec![],
        }
        .into()
    }

    #[test]
    fn test_lookup_by_name() {
        let mut parser = PreparsedSignatures::new();
        parser.insert("Two Sum", signature());
        assert_eq!(parser.len(), 1);

        let problem = Problem::new("Two Sum", "", vec![]);
        assert_eq!(parser.parse(&problem, "leetcode").unwrap(), signature());
    }

    #[test]
    fn test_unknown_problem() {
        let parser = PreparsedSignatures::new();
        let problem = Problem::new("Missing", "", vec![]);
        match parser.parse(&problem, "leetcode") {
            Err(Error::SignatureNotFound(name)) => assert_eq!(name, "Missing"),
            other => panic!("expected signature not found, got {:?}", other),
        }
    }
}
