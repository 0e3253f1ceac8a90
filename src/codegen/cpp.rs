//! C++ backend

use std::path::Path;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::problem::{Problem, Signature};
use crate::project::write_and_backup;
use crate::render::RenderConfig;
use crate::splice::Code;
use crate::templates::{embedded, render_cmake};
use crate::testgen::TestGenerator;

use super::CodeGen;

const CMAKE_FILE: &str = "CMakeLists.txt";

/// C++17 generator with a CMake build descriptor
#[derive(Debug, Clone)]
pub struct CppCodeGen {
    config: GeneratorConfig,
    template: String,
    user_template: String,
    tests: TestGenerator,
}

impl Default for CppCodeGen {
    fn default() -> Self {
        Self::with_templates(
            GeneratorConfig::default(),
            embedded::CPP_TEMPLATE.to_string(),
            embedded::CPP_USER_TEMPLATE.to_string(),
        )
    }
}

impl CppCodeGen {
    /// Backend for a configuration, reading any template overrides it names
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        let template = config
            .template_override()?
            .unwrap_or_else(|| embedded::CPP_TEMPLATE.to_string());
        let user_template = config
            .user_template_override()?
            .unwrap_or_else(|| embedded::CPP_USER_TEMPLATE.to_string());
        Ok(Self::with_templates(config, template, user_template))
    }

    pub fn with_templates(config: GeneratorConfig, template: String, user_template: String) -> Self {
        let tests = TestGenerator::new(RenderConfig {
            char_policy: config.char_policy,
        });
        Self {
            config,
            template,
            user_template,
            tests,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl CodeGen for CppCodeGen {
    fn language(&self) -> &str {
        "C++"
    }

    fn code_extension(&self) -> &str {
        ".cc"
    }

    fn line_comment_symbol(&self) -> &str {
        "//"
    }

    fn template_code(&self) -> &str {
        &self.template
    }

    fn user_template_code(&self) -> &str {
        &self.user_template
    }

    fn extra_files(&self) -> Vec<(&str, &str)> {
        vec![
            ("_testing.h", embedded::CPP_TESTING),
            ("_boilerplate.hpp", embedded::CPP_BOILERPLATE),
        ]
    }

    fn generate_code(&self, problem: &Problem, signature: &Signature) -> Result<(Code, Code)> {
        let test_code = self.tests.generate(signature)?;
        Ok((problem.code.clone(), test_code))
    }

    fn generate_additional_files(&self, project_path: &Path, file_names: &[String]) -> Result<()> {
        let cmake = render_cmake(&self.config.project_name, file_names)?;
        write_and_backup(&project_path.join(CMAKE_FILE), &cmake)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Argument, Example, FunctionSignature, ProblemSignature, Value};
    use crate::render::CharPolicy;

    fn char_problem() -> (Problem, Signature) {
        let problem = Problem::new(
            "Count Char",
            "Count c in s.",
            vec!["class Solution {".into(), "};".into()],
        );
        let sig = ProblemSignature {
            class_name: "Solution".into(),
            function: FunctionSignature::new(
                "count",
                "int",
                vec![Argument::new("string", "s"), Argument::new("char", "c")],
            ),
            examples: vec![Example {
                input: [
                    ("s".to_string(), Value::from("a")),
                    ("c".to_string(), Value::from("a")),
                ]
                .into_iter()
                .collect(),
                output: Value::Int(1),
            }],
        };
        (problem, sig.into())
    }

    #[test]
    fn test_solution_code_is_problem_code() {
        let (problem, sig) = char_problem();
        let (solution, _) = CppCodeGen::default().generate_code(&problem, &sig).unwrap();
        assert_eq!(solution, problem.code);
    }

    #[test]
    fn test_char_policy_follows_config() {
        let (problem, sig) = char_problem();

        let (_, tests) = CppCodeGen::default().generate_code(&problem, &sig).unwrap();
        assert!(tests.contains(&"    string s = \"a\";".to_string()));
        assert!(tests.contains(&"    char c = 'a';".to_string()));

        let config = GeneratorConfig {
            char_policy: CharPolicy::Length,
            ..GeneratorConfig::default()
        };
        let (_, tests) = CppCodeGen::from_config(config)
            .unwrap()
            .generate_code(&problem, &sig)
            .unwrap();
        assert!(tests.contains(&"    string s = 'a';".to_string()));
    }

    #[test]
    fn test_prepared_template_keeps_solution_and_test_sections() {
        let codegen = CppCodeGen::default();
        let template = codegen.prepared_template().unwrap();
        let splicer = codegen.splicer();
        assert!(splicer.find(&template, "USER TEMPLATE").is_none());
        assert!(splicer.find(&template, "SOLUTION CLASS").is_some());
        assert!(splicer.find(&template, "TEST").is_some());
        assert!(template.iter().any(|l| l == "#ifdef LEETCODE_LOCAL"));
    }

    #[test]
    fn test_problem_file_name() {
        assert_eq!(CppCodeGen::default().problem_file_name("B"), "B/B.cc");
    }

    #[test]
    fn test_template_override_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tpl.cc");
        std::fs::write(&path, "// BEGIN TEST\n// END TEST\n").unwrap();
        let config = GeneratorConfig {
            template_path: Some(path),
            ..GeneratorConfig::default()
        };
        let codegen = CppCodeGen::from_config(config).unwrap();
        assert_eq!(codegen.template_code(), "// BEGIN TEST\n// END TEST\n");
        // no USER TEMPLATE section in the override
        assert!(codegen.prepared_template().is_err());
    }

    #[test]
    fn test_cmake_written_to_project() {
        let dir = tempfile::tempdir().unwrap();
        CppCodeGen::default()
            .generate_additional_files(dir.path(), &["A/A.cc".to_string()])
            .unwrap();
        let cmake = std::fs::read_to_string(dir.path().join(CMAKE_FILE)).unwrap();
        assert!(cmake.contains("add_executable(A A/A.cc)"));
    }
}
