//! CLI command implementations
//!
//! - `generate`: Project generation and code preview (generate, show)
//! - `config`: Template and schema output
//! - `util`: Shared utility functions

pub mod config;
pub mod generate;
pub mod util;

pub use config::{cmd_schema, cmd_template};
pub use generate::{cmd_generate, cmd_show};
