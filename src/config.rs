//! Generator configuration
//!
//! Loaded from `lcgen.yaml`. Every field is optional; a missing file means
//! the defaults:
//!
//! ```yaml
//! char_policy: declared_type   # or: length
//! dir_naming: letter           # or: titled
//! statements: true
//! project_name: leetcode
//! template_path: my_template.cc
//! user_template_path: my_snippets.cc
//! ```

use crate::error::{Error, Result};
use crate::render::CharPolicy;
use crate::util::{column_label, problem_slug};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`GeneratorConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "lcgen.yaml";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratorConfig {
    /// When single-character strings become character literals
    #[serde(default)]
    pub char_policy: CharPolicy,

    /// Per-problem directory naming in batch mode
    #[serde(default)]
    pub dir_naming: DirNaming,

    /// Fill the `STATEMENTS` section with the problem statement
    #[serde(default = "default_true")]
    pub statements: bool,

    /// Project name written to the build descriptor
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Replacement for the embedded problem template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,

    /// Replacement for the embedded user template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_template_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_project_name() -> String {
    "leetcode".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            char_policy: CharPolicy::default(),
            dir_naming: DirNaming::default(),
            statements: true,
            project_name: default_project_name(),
            template_path: None,
            user_template_path: None,
        }
    }
}

/// Directory naming for generated problems
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DirNaming {
    /// `A`, `B`, ..., `Z`, `AA`, ...
    #[default]
    Letter,
    /// Letter plus the problem name, e.g. `A_two_sum`
    Titled,
}

impl DirNaming {
    /// Directory name for the `idx`-th problem
    pub fn dir_name(&self, idx: usize, problem_name: &str) -> String {
        let label = column_label(idx);
        match self {
            DirNaming::Letter => label,
            DirNaming::Titled => {
                let slug = problem_slug(problem_name);
                if slug.is_empty() {
                    label
                } else {
                    format!("{}_{}", label, slug)
                }
            }
        }
    }
}

impl GeneratorConfig {
    /// Load `lcgen.yaml` from a directory, if present
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_file = dir.join(CONFIG_FILE);
        if !config_file.exists() {
            return Ok(None);
        }
        Self::load(&config_file).map(Some)
    }

    /// Load a configuration file; relative template paths resolve against
    /// the file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: GeneratorConfig = serde_norway::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        if let Some(base) = path.parent() {
            config.template_path = config.template_path.map(|p| base.join(p));
            config.user_template_path = config.user_template_path.map(|p| base.join(p));
        }
        Ok(config)
    }

    /// Read the template override, if configured
    pub fn template_override(&self) -> Result<Option<String>> {
        read_override(self.template_path.as_deref())
    }

    /// Read the user template override, if configured
    pub fn user_template_override(&self) -> Result<Option<String>> {
        read_override(self.user_template_path.as_deref())
    }
}

fn read_override(path: Option<&Path>) -> Result<Option<String>> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .map(Some)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", p.display(), e))),
        None => Ok(None),
    }
}
