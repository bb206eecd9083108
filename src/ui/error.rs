//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Terminal could not be initialized or restored
    #[error("Terminal error: {0}")]
    TerminalError(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
