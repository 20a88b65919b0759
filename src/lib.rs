//! Kafka Viewer
//!
//! A Kafka exploration GUI with a custom-drawn window frame that can
//! switch to the OS native decoration at runtime. The chrome state
//! machine lives in [`chrome`]; the platform seam in [`platform`] keeps
//! it testable without a live window.

pub mod app;
pub mod chrome;
pub mod dialogs;
pub mod platform;
pub mod theme;
pub mod utils;
