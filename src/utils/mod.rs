//! Utility modules for Kafka Viewer
//!
//! Shared error types and configuration handling.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{IntoViewerError, Result, ViewerError};
