//! Error types for codesnap

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for codesnap operations
pub type Result<T> = std::result::Result<T, CodesnapError>;

/// Highlighting and configuration errors
#[derive(Error, Debug)]
pub enum CodesnapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown grammar: {0}")]
    UnknownGrammar(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown token kind: {0}")]
    UnknownTokenKind(String),

    #[error("Invalid pattern for {kind}: {source}")]
    InvalidPattern {
        kind: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Message(String),
}
