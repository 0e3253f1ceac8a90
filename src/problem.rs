//! Problem and signature types: the generator's input data model
//!
//! A `Problem` is the crawled description of one contest problem. Its
//! `Signature` describes the callable surface (class, methods, argument
//! types) together with the worked examples that become test cases.
//!
//! ## Example problem set
//!
//! ```yaml
//! site: leetcode
//! problems:
//!   - name: Square Number
//!     statement: Return n squared.
//!     code:
//!       - "class Solution {"
//!       - "public:"
//!       - "    int square(int n) {"
//!       - "    }"
//!       - "};"
//!     signature:
//!       kind: simple
//!       class_name: Solution
//!       function:
//!         name: square
//!         return_type: int
//!         arguments:
//!           - type: int
//!             name: n
//!       examples:
//!         - input: { n: 4 }
//!           output: 16
//! ```

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

/// A crawled problem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Problem {
    /// Human-readable problem name
    pub name: String,

    /// Raw problem statement
    #[serde(default)]
    pub statement: String,

    /// Crawled starter code, one entry per line
    #[serde(default, deserialize_with = "lines_or_text")]
    #[schemars(with = "Vec<String>")]
    pub code: Vec<String>,
}

impl Problem {
    pub fn new(name: impl Into<String>, statement: impl Into<String>, code: Vec<String>) -> Self {
        Self {
            name: name.into(),
            statement: statement.into(),
            code,
        }
    }
}

/// Starter code may be given as a list of lines or as one block of text
fn lines_or_text<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lines {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Lines::deserialize(deserializer)? {
        Lines::List(lines) => lines,
        Lines::Text(text) => text.lines().map(str::to_string).collect(),
    })
}

/// One declared argument of a function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Argument {
    /// Declared type in the target language, e.g. `vector<int>&`
    #[serde(rename = "type")]
    pub typ: String,

    /// Argument name
    pub name: String,
}

impl Argument {
    pub fn new(typ: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            typ: typ.into(),
            name: name.into(),
        }
    }
}

/// A function or method signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FunctionSignature {
    /// Function name
    pub name: String,

    /// Return type, e.g. `int`, `vector<int>`, `TreeNode*`
    pub return_type: String,

    /// Arguments in call-site order
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl FunctionSignature {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            arguments,
        }
    }

    /// Whether the function returns nothing
    pub fn is_void(&self) -> bool {
        self.return_type.trim() == "void"
    }

    /// Argument names in call-site order
    pub fn argument_names(&self) -> Vec<&str> {
        self.arguments.iter().map(|a| a.name.as_str()).collect()
    }

    fn check_unique_arguments(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for arg in &self.arguments {
            if !seen.insert(arg.name.as_str()) {
                return Err(Error::InvalidSignature(format!(
                    "argument '{}' appears more than once in '{}'",
                    arg.name, self.name
                )));
            }
        }
        Ok(())
    }
}

/// A runtime value taken from a worked example
///
/// Values carry no type of their own; the declared type paired with them at
/// render time decides the literal syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered sequence, possibly nested
    Seq(Vec<Value>),
    /// Level-order tree encoding, `None` marks an absent child
    Tree(Vec<Option<i64>>),
}

impl Value {
    /// Short name of the value kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Seq(_) => "sequence",
            Value::Tree(_) => "tree",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Tree(nodes) => {
                write!(f, "[")?;
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match node {
                        Some(v) => write!(f, "{}", v)?,
                        None => write!(f, "null")?,
                    }
                }
                write!(f, "]")
            }
        }
    }
}

/// A worked example of a simple problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Example {
    /// Argument name to input value
    #[serde(default)]
    pub input: HashMap<String, Value>,

    /// Expected output
    pub output: Value,
}

/// Signature of a problem solved by one pure method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProblemSignature {
    pub class_name: String,
    pub function: FunctionSignature,
    #[serde(default)]
    pub examples: Vec<Example>,
}

/// One call in an interactive scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Interaction {
    /// Name of the invoked function (the class name for the constructor)
    pub function: String,

    #[serde(default)]
    pub input: HashMap<String, Value>,

    /// Expected output, absent for constructors and void methods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
}

/// Signature of a stateful problem driven through a sequence of calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InteractiveProblemSignature {
    pub class_name: String,

    /// Class methods; the constructor is named after the class
    pub functions: Vec<FunctionSignature>,

    /// Scenarios, each an ordered sequence of interactions
    #[serde(default)]
    pub examples: Vec<Vec<Interaction>>,
}

impl InteractiveProblemSignature {
    /// Look up a declared function by name
    pub fn function(&self, name: &str) -> Result<&FunctionSignature> {
        self.functions
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| Error::UnknownFunction {
                function: name.to_string(),
                class: self.class_name.clone(),
            })
    }
}

/// Parsed signature of a problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signature {
    Simple(ProblemSignature),
    Interactive(InteractiveProblemSignature),
}

impl Signature {
    pub fn class_name(&self) -> &str {
        match self {
            Signature::Simple(sig) => &sig.class_name,
            Signature::Interactive(sig) => &sig.class_name,
        }
    }

    /// Number of generated test functions
    pub fn example_count(&self) -> usize {
        match self {
            Signature::Simple(sig) => sig.examples.len(),
            Signature::Interactive(sig) => sig.examples.len(),
        }
    }

    /// Check the structural invariants the generator relies on
    pub fn validate(&self) -> Result<()> {
        match self {
            Signature::Simple(sig) => sig.function.check_unique_arguments(),
            Signature::Interactive(sig) => {
                let mut names = HashSet::new();
                for func in &sig.functions {
                    func.check_unique_arguments()?;
                    if !names.insert(func.name.as_str()) {
                        return Err(Error::InvalidSignature(format!(
                            "function '{}' is declared more than once on '{}'",
                            func.name, sig.class_name
                        )));
                    }
                }
                for scenario in &sig.examples {
                    for interaction in scenario {
                        sig.function(&interaction.function)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl From<ProblemSignature> for Signature {
    fn from(sig: ProblemSignature) -> Self {
        Signature::Simple(sig)
    }
}

impl From<InteractiveProblemSignature> for Signature {
    fn from(sig: InteractiveProblemSignature) -> Self {
        Signature::Interactive(sig)
    }
}

/// A problem together with its already-parsed signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProblemEntry {
    #[serde(flatten)]
    pub problem: Problem,
    pub signature: Signature,
}

/// Input document: the problems of one contest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "lcgen problem set", description = "Problems with pre-parsed signatures")]
pub struct ProblemSet {
    /// Site the problems were crawled from
    #[serde(default = "default_site")]
    pub site: String,

    #[serde(default)]
    pub problems: Vec<ProblemEntry>,
}

fn default_site() -> String {
    "leetcode".to_string()
}

impl ProblemSet {
    /// Parse from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a problem set, choosing the format by file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// The crawled problems, in document order
    pub fn problems(&self) -> Vec<Problem> {
        self.problems.iter().map(|e| e.problem.clone()).collect()
    }

    /// Find a problem by name
    pub fn find(&self, name: &str) -> Option<&ProblemEntry> {
        self.problems.iter().find(|e| e.problem.name == name)
    }

    /// Validate every signature in the set
    pub fn validate(&self) -> Result<()> {
        for entry in &self.problems {
            entry.signature.validate().map_err(|e| {
                Error::InvalidSignature(format!("problem '{}': {}", entry.problem.name, e))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = r#"
site: leetcode
problems:
  - name: Square Number
    statement: Return n squared.
    code: |
      class Solution {
      public:
          int square(int n) {
          }
      };
    signature:
      kind: simple
      class_name: Solution
      function:
        name: square
        return_type: int
        arguments:
          - type: int
            name: n
      examples:
        - input: { n: 4 }
          output: 16
"#;

    #[test]
    fn test_parse_simple_problem_set() {
        let set = ProblemSet::from_yaml(SIMPLE).unwrap();
        assert_eq!(set.site, "leetcode");
        assert_eq!(set.problems.len(), 1);

        let entry = &set.problems[0];
        assert_eq!(entry.problem.name, "Square Number");
        assert_eq!(entry.problem.code.len(), 5);
        assert_eq!(entry.problem.code[0], "class Solution {");

        match &entry.signature {
            Signature::Simple(sig) => {
                assert_eq!(sig.function.name, "square");
                assert_eq!(sig.examples[0].input["n"], Value::Int(4));
                assert_eq!(sig.examples[0].output, Value::Int(16));
            }
            other => panic!("expected simple signature, got {:?}", other),
        }
    }

    #[test]
    fn test_value_shapes_from_json() {
        let v: Value = serde_json::from_str("[1, null, 2]").unwrap();
        assert_eq!(v, Value::Tree(vec![Some(1), None, Some(2)]));

        let v: Value = serde_json::from_str("[[1, 2], []]").unwrap();
        assert_eq!(
            v,
            Value::Seq(vec![
                Value::Seq(vec![Value::Int(1), Value::Int(2)]),
                Value::Seq(vec![]),
            ])
        );

        let v: Value = serde_json::from_str("2.5").unwrap();
        assert_eq!(v, Value::Float(2.5));

        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Bool(true));

        let v: Value = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(v, Value::Str("a".into()));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(vec![1i64, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::Tree(vec![Some(1), None]).to_string(), "[1, null]");
        assert_eq!(Value::from("x").to_string(), "\"x\"");
    }

    #[test]
    fn test_validate_rejects_duplicate_arguments() {
        let sig = Signature::Simple(ProblemSignature {
            class_name: "Solution".into(),
            function: FunctionSignature::new(
                "f",
                "int",
                vec![Argument::new("int", "a"), Argument::new("int", "a")],
            ),
            examples: vec![],
        });
        assert!(matches!(sig.validate(), Err(Error::InvalidSignature(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_interaction() {
        let sig = Signature::Interactive(InteractiveProblemSignature {
            class_name: "Foo".into(),
            functions: vec![FunctionSignature::new("Foo", "", vec![])],
            examples: vec![vec![Interaction {
                function: "missing".into(),
                input: HashMap::new(),
                output: None,
            }]],
        });
        match sig.validate() {
            Err(Error::UnknownFunction { function, class }) => {
                assert_eq!(function, "missing");
                assert_eq!(class, "Foo");
            }
            other => panic!("expected unknown function, got {:?}", other),
        }
    }
}
