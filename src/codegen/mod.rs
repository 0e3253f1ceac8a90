//! Generator backends
//!
//! A backend owns everything language-specific: the template with its
//! section markers, the verbatim support files, and the code generation for
//! solution and test sections. The project driver only talks to
//! [`CodeGen`].

mod cpp;

pub use cpp::CppCodeGen;

use std::path::Path;

use crate::error::Result;
use crate::problem::{Problem, Signature};
use crate::splice::{to_code, Code, Section, Splicer};
use crate::util::comment_lines;

/// Column limit for statement comments
const STATEMENT_WIDTH: usize = 80;

/// A target-language code generator
pub trait CodeGen {
    /// Name of the language to generate
    fn language(&self) -> &str;

    /// File extension for code files, including the dot
    fn code_extension(&self) -> &str;

    /// Symbol starting a line comment
    fn line_comment_symbol(&self) -> &str;

    /// Template for each problem. Must contain `SOLUTION CLASS`, `SUBMIT`,
    /// `USER TEMPLATE` and `TEST` sections; `STATEMENTS` is optional.
    fn template_code(&self) -> &str;

    /// Code for the `SOLUTION CLASS` and `TEST` sections
    fn generate_code(&self, problem: &Problem, signature: &Signature) -> Result<(Code, Code)>;

    /// Snippets spliced into the `USER TEMPLATE` section of every problem
    fn user_template_code(&self) -> &str {
        ""
    }

    /// Files written verbatim next to each problem, file name to contents
    fn extra_files(&self) -> Vec<(&str, &str)> {
        Vec::new()
    }

    /// Project-level files produced after all problems, e.g. a build
    /// descriptor. `file_names` are the problem code files relative to
    /// `project_path`, in problem order.
    fn generate_additional_files(&self, _project_path: &Path, _file_names: &[String]) -> Result<()> {
        Ok(())
    }

    /// Code file of a problem, relative to the project: `A/A.cc`
    fn problem_file_name(&self, dir_name: &str) -> String {
        format!("{}/{}{}", dir_name, dir_name, self.code_extension())
    }

    /// Content for the optional `STATEMENTS` section
    fn format_statement(&self, problem: &Problem) -> Code {
        comment_lines(&problem.statement, self.line_comment_symbol(), STATEMENT_WIDTH)
    }

    /// Section splicer using this backend's comment symbol
    fn splicer(&self) -> Splicer<'_> {
        Splicer::new(self.line_comment_symbol(), self.language())
    }

    /// Replace template sections, see [`Splicer::replace`]
    fn replace_sections(
        &self,
        code: &[String],
        sections: &[(&str, Code)],
        ignore_errors: bool,
    ) -> Result<Code> {
        self.splicer().replace(code, sections, ignore_errors)
    }

    /// Template lines with the user template already spliced in
    fn prepared_template(&self) -> Result<Code> {
        let template = to_code(self.template_code().trim());
        let user_template = match self.user_template_code().trim() {
            "" => Code::new(),
            text => to_code(text),
        };
        self.replace_sections(
            &template,
            &[(Section::UserTemplate.name(), user_template)],
            false,
        )
    }
}
