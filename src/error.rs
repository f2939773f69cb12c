use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnipexError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database not found at: {0}")]
    DatabaseNotFound(String),

    #[error("Invalid snippet definition: {0}")]
    InvalidDefinition(String),

    #[error("Shortcut '{0}' not found")]
    SnippetNotFound(String),

    #[error("Shortcut '{0}' already exists")]
    DuplicateTrigger(String),

    #[error("Invalid snippet type ordinal: {0}")]
    InvalidSnippetType(u8),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SnipexError>;
