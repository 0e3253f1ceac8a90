//! Error types for lcgen

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// lcgen errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Section '{section}' not found in template code for {generator}")]
    MissingSection { section: String, generator: String },

    #[error("Interaction calls '{function}', which is not declared on class '{class}'")]
    UnknownFunction { function: String, class: String },

    #[error("'{function}' is called before any '{class}' instance is constructed")]
    NotConstructed { function: String, class: String },

    #[error("Example for '{function}' has no input for argument '{argument}'")]
    MissingInput { function: String, argument: String },

    #[error("Interaction with '{function}' returns a value but has no expected output")]
    MissingOutput { function: String },

    #[error("Cannot render {value} as '{ty}': {reason}")]
    Unrenderable {
        value: String,
        ty: String,
        reason: String,
    },

    #[error("No signature available for problem '{0}'")]
    SignatureNotFound(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<minijinja::Error> for Error {
    fn from(e: minijinja::Error) -> Self {
        Error::Template(e.to_string())
    }
}
