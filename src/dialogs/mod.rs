//! Dialogs for Kafka Viewer

pub mod about;

pub use about::AboutDialog;
