//! Error types for cipher operations

use std::path::PathBuf;
use thiserror::Error;

/// Error type for cipher and file transform operations
#[derive(Debug, Error)]
pub enum Error {
    /// The key cannot be used with the selected strategy
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The input does not match the format the strategy expects
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A file operation was requested before a strategy was selected
    #[error("no cipher strategy selected")]
    NoStrategySelected,

    /// A file could not be read or written
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        /// What was being attempted ("read" or "write")
        action: &'static str,
        /// The path the operation failed on
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, Error>;
