//! Error types for Kafka Viewer
//!
//! This module defines custom error types used throughout the application.
//! We use thiserror for convenient error type definitions and anyhow for
//! application-level error handling.

use thiserror::Error;

/// Main error type for Kafka Viewer
#[derive(Error, Debug)]
pub enum ViewerError {
    /// Window-related errors
    #[error("Window error: {0}")]
    Window(String),

    /// Chrome (title bar / resize handle) errors
    #[error("Chrome error: {0}")]
    Chrome(String),

    /// Theme loading/application errors
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error for unexpected situations
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Results in Kafka Viewer
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Extension trait for converting other errors to ViewerError
pub trait IntoViewerError<T> {
    /// Convert this error into a ViewerError with the given context
    fn window_err(self, context: &str) -> Result<T>;
    fn chrome_err(self, context: &str) -> Result<T>;
    fn theme_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoViewerError<T> for std::result::Result<T, E> {
    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ViewerError::Window(format!("{}: {}", context, e)))
    }

    fn chrome_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ViewerError::Chrome(format!("{}: {}", context, e)))
    }

    fn theme_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ViewerError::Theme(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ViewerError::Config(format!("{}: {}", context, e)))
    }
}
