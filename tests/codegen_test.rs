//! End-to-end code generation for single problems
//!
//! Runs the problem-set fixture through the C++ backend with a minimal
//! template so the whole spliced file can be compared line by line.

use lcgen::*;
use pretty_assertions::assert_eq;
use std::path::Path;

const TEMPLATE: &str = "\
// BEGIN STATEMENTS
// END STATEMENTS
// BEGIN SUBMIT
// BEGIN USER TEMPLATE
// END USER TEMPLATE
// BEGIN SOLUTION CLASS
// END SOLUTION CLASS
// END SUBMIT
// BEGIN TEST
// END TEST
";

fn fixture() -> ProblemSet {
    ProblemSet::load(Path::new("tests/fixtures/problems.yaml")).unwrap()
}

fn codegen() -> CppCodeGen {
    CppCodeGen::with_templates(
        GeneratorConfig::default(),
        TEMPLATE.to_string(),
        "#include <vector>\nusing namespace std;".to_string(),
    )
}

fn generate(name: &str) -> Vec<String> {
    let set = fixture();
    let parser = PreparsedSignatures::from(&set);
    let codegen = codegen();
    let project = Project::new(&codegen, &parser, &set.site);
    let template = codegen.prepared_template().unwrap();
    let problem = &set.find(name).unwrap().problem;
    project.problem_code(&template, problem).unwrap()
}

#[test]
fn test_fixture_is_valid() {
    let set = fixture();
    set.validate().unwrap();
    assert_eq!(set.problems.len(), 3);
}

#[test]
fn test_simple_problem_file() {
    assert_eq!(
        generate("Square Number"),
        vec![
            "// Given an integer n, return n squared.",
            "// BEGIN SUBMIT",
            "#include <vector>",
            "using namespace std;",
            "class Solution {",
            "public:",
            "    int square(int n) {",
            "    }",
            "};",
            "// END SUBMIT",
            "void test_example_0(Solution &_sol) {",
            "    int n = 4;",
            "    int _ret_ans = 16;",
            "    int _ret = _sol.square(n);",
            "    test(\"Example - 0\", _ret_ans, _ret);",
            "}",
            "",
            "",
            "void test_example_1(Solution &_sol) {",
            "    int n = -3;",
            "    int _ret_ans = 9;",
            "    int _ret = _sol.square(n);",
            "    test(\"Example - 1\", _ret_ans, _ret);",
            "}",
            "",
            "",
            "int main() {",
            "    Solution _sol;",
            "    test_example_0(_sol);",
            "    test_example_1(_sol);",
            "}",
        ]
    );
}

#[test]
fn test_interactive_problem_file() {
    let code = generate("Foo Counter");
    let codegen = codegen();
    assert!(codegen.splicer().find(&code, "TEST").is_none());

    let start = code.iter().position(|l| l == "void test_example_0() {").unwrap();
    assert_eq!(
        code[start..].to_vec(),
        vec![
            "void test_example_0() {",
            "    int x;",
            "    Foo _sol;",
            "    x = 3;",
            "    int _ret_ans1 = 9;",
            "    int _ret1 = _sol.bar(x);",
            "    test(\"Example - 0 - Interaction 1\", _ret_ans1, _ret1);",
            "}",
            "",
            "",
            "int main() {",
            "    test_example_0();",
            "}",
        ]
    );
}

#[test]
fn test_tree_argument_uses_runtime_builder() {
    let code = generate("Symmetric Tree");
    assert!(code.contains(
        &"    TreeNode* root = _construct_tree({1, 2, 2, NONE, 3, NONE, 3});".to_string()
    ));
    assert!(code.contains(&"    bool _ret_ans = false;".to_string()));
}

#[test]
fn test_statements_disabled_removes_section() {
    let set = fixture();
    let parser = PreparsedSignatures::from(&set);
    let codegen = codegen();
    let project = Project::new(&codegen, &parser, &set.site).with_statements(false);
    let template = codegen.prepared_template().unwrap();
    let code = project
        .problem_code(&template, &set.find("Square Number").unwrap().problem)
        .unwrap();
    assert_eq!(code[0], "// BEGIN SUBMIT");
    assert_eq!(code[1], "#include <vector>");
}

#[test]
fn test_template_without_statements_section() {
    let codegen = CppCodeGen::with_templates(
        GeneratorConfig::default(),
        TEMPLATE.replace("// BEGIN STATEMENTS\n// END STATEMENTS\n", ""),
        String::new(),
    );
    let set = fixture();
    let parser = PreparsedSignatures::from(&set);
    let project = Project::new(&codegen, &parser, &set.site);
    let template = codegen.prepared_template().unwrap();
    let code = project
        .problem_code(&template, &set.find("Square Number").unwrap().problem)
        .unwrap();
    assert_eq!(code[0], "// BEGIN SUBMIT");
    assert_eq!(code[1], "class Solution {");
}

#[test]
fn test_missing_test_section_is_reported() {
    let codegen = CppCodeGen::with_templates(
        GeneratorConfig::default(),
        TEMPLATE.replace("// BEGIN TEST\n// END TEST\n", ""),
        String::new(),
    );
    let set = fixture();
    let parser = PreparsedSignatures::from(&set);
    let project = Project::new(&codegen, &parser, &set.site);
    let template = codegen.prepared_template().unwrap();
    let err = project
        .problem_code(&template, &set.find("Square Number").unwrap().problem)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Section 'TEST' not found in template code for C++"
    );
}

#[test]
fn test_embedded_template_produces_complete_file() {
    let set = fixture();
    let parser = PreparsedSignatures::from(&set);
    let codegen = CppCodeGen::default();
    let project = Project::new(&codegen, &parser, &set.site);
    let template = codegen.prepared_template().unwrap();
    let code = project
        .problem_code(&template, &set.find("Square Number").unwrap().problem)
        .unwrap();

    // only the submission markers survive
    let markers: Vec<&str> = code
        .iter()
        .map(String::as_str)
        .filter(|l| l.starts_with("// BEGIN") || l.starts_with("// END"))
        .collect();
    assert_eq!(markers, vec!["// BEGIN SUBMIT", "// END SUBMIT"]);
    assert!(code.contains(&"#include \"_testing.h\"".to_string()));
    assert!(code.contains(&"    int square(int n) {".to_string()));
    assert_eq!(code.last().map(String::as_str), Some("}"));
}
