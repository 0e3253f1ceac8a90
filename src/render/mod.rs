//! Value rendering: turn example values into C++ literal expressions
//!
//! The declared type drives the output, not the value:
//! - containers render as brace lists, recursing with the element type
//! - `TreeNode*` renders as a `_construct_tree({...})` builder call
//! - `ListNode*` renders as a `_construct_list({...})` builder call
//! - `char` renders single-character strings with single quotes
//!
//! Anything else that does not fit fails with [`Error::Unrenderable`].

pub mod types;

use crate::error::{Error, Result};
use crate::problem::Value;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sentinel written for absent tree nodes
pub const TREE_SENTINEL: &str = "NONE";

/// Runtime helper that rebuilds a tree from its level-order encoding
pub const TREE_BUILDER: &str = "_construct_tree";

/// Runtime helper that rebuilds a linked list from its values
pub const LIST_BUILDER: &str = "_construct_list";

/// Render a value with the default configuration
pub fn render(value: &Value, declared_type: &str) -> Result<String> {
    Renderer::default().render(value, declared_type)
}

/// When a string renders as a character literal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CharPolicy {
    /// Character literal iff the declared type is `char`
    #[default]
    DeclaredType,
    /// Character literal for every one-character string
    Length,
}

/// Render configuration
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pub char_policy: CharPolicy,
}

/// C++ literal renderer
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn with_char_policy(char_policy: CharPolicy) -> Self {
        Self::new(RenderConfig { char_policy })
    }

    /// Render `value` as a literal expression of `declared_type`
    pub fn render(&self, value: &Value, declared_type: &str) -> Result<String> {
        if types::is_tree(declared_type) {
            let nodes = tree_nodes(value, declared_type)?;
            return Ok(builder_call(TREE_BUILDER, &nodes));
        }
        if types::is_linked_list(declared_type) {
            let nodes = list_nodes(value, declared_type)?;
            return Ok(builder_call(LIST_BUILDER, &nodes));
        }

        match value {
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(x) => render_float(*x, declared_type),
            Value::Str(s) => self.render_str(s, declared_type),
            Value::Seq(items) => {
                let elem = types::element_type(declared_type).ok_or_else(|| {
                    unrenderable(value, declared_type, "declared type is not a container")
                })?;
                let rendered = items
                    .iter()
                    .map(|item| self.render(item, &elem))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{{{}}}", rendered.join(", ")))
            }
            Value::Tree(_) => Err(unrenderable(
                value,
                declared_type,
                "tree encodings need a TreeNode* type",
            )),
        }
    }

    fn render_str(&self, s: &str, declared_type: &str) -> Result<String> {
        let as_char = match self.config.char_policy {
            CharPolicy::DeclaredType => {
                if types::is_char(declared_type) && s.chars().count() != 1 {
                    return Err(unrenderable(
                        &Value::Str(s.to_string()),
                        declared_type,
                        "a char needs exactly one character",
                    ));
                }
                types::is_char(declared_type)
            }
            CharPolicy::Length => s.chars().count() == 1,
        };

        if as_char {
            Ok(format!("'{}'", escape(s, '\'')))
        } else {
            Ok(format!("\"{}\"", escape(s, '"')))
        }
    }
}

/// Floats always keep a decimal point or exponent
fn render_float(x: f64, declared_type: &str) -> Result<String> {
    if !x.is_finite() {
        return Err(unrenderable(
            &Value::Float(x),
            declared_type,
            "non-finite floats have no literal",
        ));
    }
    Ok(format!("{:?}", x))
}

fn escape(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

fn tree_nodes(value: &Value, declared_type: &str) -> Result<Vec<Option<i64>>> {
    match value {
        Value::Tree(nodes) => Ok(nodes.clone()),
        Value::Int(v) => Ok(vec![Some(*v)]),
        Value::Seq(items) => items
            .iter()
            .map(|item| match item {
                Value::Int(v) => Ok(Some(*v)),
                _ => Err(unrenderable(
                    value,
                    declared_type,
                    "tree nodes must be integers or null",
                )),
            })
            .collect(),
        _ => Err(unrenderable(
            value,
            declared_type,
            "expected a level-order node list",
        )),
    }
}

fn list_nodes(value: &Value, declared_type: &str) -> Result<Vec<Option<i64>>> {
    match value {
        Value::Int(v) => Ok(vec![Some(*v)]),
        Value::Seq(items) => items
            .iter()
            .map(|item| match item {
                Value::Int(v) => Ok(Some(*v)),
                _ => Err(unrenderable(
                    value,
                    declared_type,
                    "list nodes must be integers",
                )),
            })
            .collect(),
        _ => Err(unrenderable(
            value,
            declared_type,
            "expected a list of node values",
        )),
    }
}

fn builder_call(builder: &str, nodes: &[Option<i64>]) -> String {
    let items = nodes
        .iter()
        .map(|n| match n {
            Some(v) => v.to_string(),
            None => TREE_SENTINEL.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({{{}}})", builder, items)
}

fn unrenderable(value: &Value, ty: &str, reason: &str) -> Error {
    Error::Unrenderable {
        value: value.to_string(),
        ty: ty.to_string(),
        reason: reason.to_string(),
    }
}
