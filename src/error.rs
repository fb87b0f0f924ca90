use std::io;
use thiserror::Error;

/// Custom error type for the treecol library
#[derive(Error, Debug)]
pub enum TreecolError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Result type alias for the treecol library
pub type Result<T> = std::result::Result<T, TreecolError>;

impl TreecolError {
    /// Create an invalid path error
    pub fn invalid_path<S: Into<String>>(msg: S) -> Self {
        TreecolError::InvalidPath(msg.into())
    }
}
