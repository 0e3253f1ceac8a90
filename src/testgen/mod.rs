//! Test generation: turn worked examples into C++ test functions
//!
//! Two protocols, picked by the signature variant:
//! - simple: one `test_example_{i}(Class &_sol)` per example, each calling
//!   the method once and comparing against the expected output
//! - interactive: one `test_example_{i}()` per scenario, replaying the
//!   scenario's calls against a single instance
//!
//! Both finish with an `int main()` driver calling every test function once.

mod interactive;
mod simple;

use crate::error::Result;
use crate::problem::Signature;
use crate::render::{RenderConfig, Renderer};
use crate::splice::Code;
use crate::statement;

/// Name of the solution instance in generated code
pub const INSTANCE: &str = "_sol";

/// Expected-output variable
pub const EXPECTED: &str = "_ret_ans";

/// Actual-output variable
pub const ACTUAL: &str = "_ret";

/// Comparison/report function from `_testing.h`
pub const REPORT: &str = "test";

const INDENT: &str = "    ";

/// Generate test code for a signature with the default configuration
pub fn generate_tests(signature: &Signature) -> Result<Code> {
    TestGenerator::default().generate(signature)
}

/// Test generator
#[derive(Debug, Clone, Default)]
pub struct TestGenerator {
    renderer: Renderer,
}

impl TestGenerator {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            renderer: Renderer::new(config),
        }
    }

    /// Test functions followed by the driver, two blank lines apart
    pub fn generate(&self, signature: &Signature) -> Result<Code> {
        let (functions, driver) = match signature {
            Signature::Simple(sig) => simple::generate(&self.renderer, sig)?,
            Signature::Interactive(sig) => interactive::generate(&self.renderer, sig)?,
        };
        let blocks = functions.into_iter().chain(std::iter::once(driver));
        Ok(list_join(blocks, &[String::new(), String::new()]))
    }
}

/// Concatenate blocks with `sep` between consecutive ones
pub fn list_join<T: Clone>(blocks: impl IntoIterator<Item = Vec<T>>, sep: &[T]) -> Vec<T> {
    let mut out = Vec::new();
    for (idx, block) in blocks.into_iter().enumerate() {
        if idx > 0 {
            out.extend_from_slice(sep);
        }
        out.extend(block);
    }
    out
}

/// `header {`, indented body, `}`
fn function_block(header: String, body: Vec<String>) -> Code {
    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(format!("{} {{", header));
    out.extend(body.into_iter().map(|line| format!("{}{}", INDENT, line)));
    out.push("}".to_string());
    out
}

/// `test("label", _ret_ans, _ret);`
fn report(renderer: &Renderer, label: &str, expected: &str, actual: &str) -> Result<String> {
    let label = renderer.render(&label.into(), "string")?;
    Ok(format!(
        "{};",
        statement::call(REPORT, &[label.as_str(), expected, actual])
    ))
}

fn test_function_name(idx: usize) -> String {
    format!("test_example_{}", idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_join() {
        let joined = list_join(vec![vec![1, 2], vec![3], vec![4]], &[0, 0]);
        assert_eq!(joined, vec![1, 2, 0, 0, 3, 0, 0, 4]);
        let single = list_join(vec![vec![1]], &[0]);
        assert_eq!(single, vec![1]);
        let empty: Vec<i32> = list_join(Vec::<Vec<i32>>::new(), &[0]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_function_block_indents_body() {
        let block = function_block("int main()".into(), vec!["return 0;".into()]);
        assert_eq!(block, vec!["int main() {", "    return 0;", "}"]);
    }

    #[test]
    fn test_report_quotes_label() {
        let line = report(&Renderer::default(), "Example - 0", EXPECTED, ACTUAL).unwrap();
        assert_eq!(line, "test(\"Example - 0\", _ret_ans, _ret);");
    }
}
