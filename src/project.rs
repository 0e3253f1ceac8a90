//! Project materialization
//!
//! Writes one directory per problem (batch mode) or a flat set of files
//! (single-problem mode). Existing files with different contents are moved
//! aside to a timestamped backup before being overwritten.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::codegen::CodeGen;
use crate::config::DirNaming;
use crate::error::Result;
use crate::parser::SignatureParser;
use crate::problem::Problem;
use crate::splice::{Code, Section};
use crate::templates::embedded;
use crate::util::problem_slug;

/// Empty input file created next to each problem
pub const INPUT_FILE: &str = "in.txt";

/// Input-rewriting helper created next to each problem
pub const TRANSFORMER_FILE: &str = "transformer.py";

/// What [`write_and_backup`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Unchanged,
    Replaced { backup: PathBuf },
}

/// Write `contents` to `path`, moving a differing existing file aside first
pub fn write_and_backup(path: &Path, contents: &str) -> Result<WriteOutcome> {
    if path.exists() {
        if fs::read(path)? == contents.as_bytes() {
            return Ok(WriteOutcome::Unchanged);
        }
        let backup = backup_path(path)?;
        fs::rename(path, &backup)?;
        tracing::warn!(
            file = %path.display(),
            backup = %backup.display(),
            "file exists, moved to backup"
        );
        fs::write(path, contents)?;
        return Ok(WriteOutcome::Replaced { backup });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(WriteOutcome::Created)
}

/// `<stem>_<YYYYmmdd_HHMMSS><ext>` next to the original, with a `_<n>`
/// counter after the stamp when that name is taken
fn backup_path(path: &Path) -> Result<PathBuf> {
    let metadata = fs::metadata(path)?;
    let time: SystemTime = metadata.created().or_else(|_| metadata.modified())?;
    let stamp = DateTime::<Local>::from(time).format("%Y%m%d_%H%M%S");

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let mut backup = path.with_file_name(format!("{}_{}{}", stem, stamp, ext));
    let mut counter = 1;
    while backup.exists() {
        backup = path.with_file_name(format!("{}_{}_{}{}", stem, stamp, counter, ext));
        counter += 1;
    }
    Ok(backup)
}

/// Result of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectReport {
    /// Code files written, relative to the project directory
    pub generated: Vec<String>,
    /// (problem name, error message) for each problem that failed
    pub failures: Vec<(String, String)>,
}

impl ProjectReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives a backend over a list of problems
pub struct Project<'a, G: CodeGen + ?Sized, P: SignatureParser + ?Sized> {
    codegen: &'a G,
    parser: &'a P,
    site: &'a str,
    dir_naming: DirNaming,
    statements: bool,
    debug: bool,
}

impl<'a, G: CodeGen + ?Sized, P: SignatureParser + ?Sized> Project<'a, G, P> {
    pub fn new(codegen: &'a G, parser: &'a P, site: &'a str) -> Self {
        Self {
            codegen,
            parser,
            site,
            dir_naming: DirNaming::default(),
            statements: true,
            debug: false,
        }
    }

    pub fn with_dir_naming(mut self, dir_naming: DirNaming) -> Self {
        self.dir_naming = dir_naming;
        self
    }

    pub fn with_statements(mut self, statements: bool) -> Self {
        self.statements = statements;
        self
    }

    /// Propagate the first per-problem error instead of recording it
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Complete code file for one problem
    pub fn problem_code(&self, template: &[String], problem: &Problem) -> Result<Code> {
        let signature = self.parser.parse(problem, self.site)?;
        signature.validate()?;
        let (solution, tests) = self.codegen.generate_code(problem, &signature)?;
        let code = self.codegen.replace_sections(
            template,
            &[
                (Section::SolutionClass.name(), solution),
                (Section::Test.name(), tests),
            ],
            false,
        )?;
        let statement = if self.statements {
            self.codegen.format_statement(problem)
        } else {
            Code::new()
        };
        self.codegen
            .replace_sections(&code, &[(Section::Statements.name(), statement)], true)
    }

    /// One directory per problem plus the backend's project files
    pub fn create(&self, project_path: &Path, problems: &[Problem]) -> Result<ProjectReport> {
        let template = self.codegen.prepared_template()?;
        fs::create_dir_all(project_path)?;

        let mut report = ProjectReport::default();
        for (idx, problem) in problems.iter().enumerate() {
            let dir_name = self.dir_naming.dir_name(idx, &problem.name);
            let file_name = self.codegen.problem_file_name(&dir_name);
            let result = self.problem_code(&template, problem).and_then(|code| {
                self.write_problem(
                    &project_path.join(&dir_name),
                    &file_name_only(&file_name),
                    &code,
                )
            });

            match result {
                Ok(()) => {
                    tracing::info!(problem = %problem.name, file = %file_name, "generated");
                    report.generated.push(file_name);
                }
                Err(e) if self.debug => return Err(e),
                Err(e) => {
                    tracing::error!(problem = %problem.name, error = %e, "generation failed");
                    report.failures.push((problem.name.clone(), e.to_string()));
                }
            }
        }

        self.codegen
            .generate_additional_files(project_path, &report.generated)?;
        Ok(report)
    }

    /// Files for a single problem written flat into `project_path`
    pub fn create_single(&self, project_path: &Path, problem: &Problem) -> Result<PathBuf> {
        let template = self.codegen.prepared_template()?;
        let slug = problem_slug(&problem.name);
        let stem = if slug.is_empty() { "main".to_string() } else { slug };
        let file_name = format!("{}{}", stem, self.codegen.code_extension());

        let code = self.problem_code(&template, problem)?;
        self.write_problem(project_path, &file_name, &code)?;
        tracing::info!(problem = %problem.name, file = %file_name, "generated");
        Ok(project_path.join(file_name))
    }

    fn write_problem(&self, dir: &Path, file_name: &str, code: &[String]) -> Result<()> {
        fs::create_dir_all(dir)?;
        write_and_backup(&dir.join(file_name), &format!("{}\n", code.join("\n")))?;
        write_and_backup(&dir.join(INPUT_FILE), "")?;
        write_and_backup(&dir.join(TRANSFORMER_FILE), embedded::TRANSFORMER)?;
        for (name, contents) in self.codegen.extra_files() {
            write_and_backup(&dir.join(name), contents)?;
        }
        Ok(())
    }
}

fn file_name_only(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

/// Generate a project directory for `problems`
pub fn create_project<G, P>(
    project_path: &Path,
    problems: &[Problem],
    codegen: &G,
    parser: &P,
    site: &str,
    debug: bool,
) -> Result<ProjectReport>
where
    G: CodeGen + ?Sized,
    P: SignatureParser + ?Sized,
{
    Project::new(codegen, parser, site)
        .with_debug(debug)
        .create(project_path, problems)
}

/// Generate a single problem's files directly into `project_path`
pub fn create_project_single_problem<G, P>(
    project_path: &Path,
    problem: &Problem,
    codegen: &G,
    parser: &P,
    site: &str,
) -> Result<PathBuf>
where
    G: CodeGen + ?Sized,
    P: SignatureParser + ?Sized,
{
    Project::new(codegen, parser, site).create_single(project_path, problem)
}
