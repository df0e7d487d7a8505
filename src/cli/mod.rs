//! CLI support for sift-lang
//!
//! Provides programmatic access to the `sift` command so the parsing,
//! rendering and vocabulary loading it performs can be embedded in other
//! tools and tested without spawning a process.

mod check;
mod docs;

pub use check::{Command, CommandOptions, execute, load_vocabulary};
pub use docs::get_syntax_reference;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Cannot render filter: {0}")]
    Render(#[from] crate::RenderError),

    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] crate::VocabularyError),

    #[error("Cannot encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No input provided. Pass the text as an argument or pipe it to stdin.")]
    NoInput,
}
