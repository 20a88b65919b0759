//! Window chrome for Kafka Viewer
//!
//! This module implements the custom-drawn window frame: the title bar
//! with logo, menu and window controls, the eight resize handles, and
//! the controller that switches between custom and native chrome at
//! runtime without losing window state or dropping the menu.

pub mod bar;
pub mod controller;
pub mod menu;
pub mod resize;

pub use bar::{BarRequest, ChromeBar, ItemActivation};
pub use controller::WindowChromeController;
pub use menu::{MenuCommand, MenuHost, MenuOwnershipManager, MenuStructure};
pub use resize::ResizeEdgeController;

use crate::utils::config::ChromeConfig;

/// Whether the window chrome is custom-drawn or delegated to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameMode {
    #[default]
    Custom,
    Native,
}

/// Realized window state, owned by the platform window manager.
///
/// The chrome only observes and mirrors this; UI controls request
/// changes and the platform reports the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowRunState {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

/// Chrome metrics for layout and hit testing
#[derive(Debug, Clone, Copy)]
pub struct ChromeMetrics {
    /// Total window width
    pub width: u32,

    /// Total window height
    pub height: u32,

    /// Title bar height
    pub titlebar_height: u32,

    /// Window-control button width
    pub control_size: u32,

    /// Logo edge length
    pub logo_size: u32,

    /// Resize handle thickness
    pub resize_border: u32,
}

impl ChromeMetrics {
    /// Build metrics from configuration and the initial window size.
    pub fn from_config(chrome: &ChromeConfig, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            titlebar_height: chrome.titlebar_height,
            control_size: chrome.control_size,
            logo_size: chrome.logo_size,
            resize_border: chrome.resize_border,
        }
    }
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 640,
            titlebar_height: 32,
            control_size: 46,
            logo_size: 24,
            resize_border: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_mode_default() {
        assert_eq!(FrameMode::default(), FrameMode::Custom);
    }

    #[test]
    fn test_run_state_default() {
        assert_eq!(WindowRunState::default(), WindowRunState::Normal);
    }

    #[test]
    fn test_chrome_metrics_default() {
        let metrics = ChromeMetrics::default();
        assert_eq!(metrics.width, 1024);
        assert_eq!(metrics.height, 640);
        assert_eq!(metrics.titlebar_height, 32);
        assert_eq!(metrics.control_size, 46);
        assert_eq!(metrics.resize_border, 6);
    }

    #[test]
    fn test_chrome_metrics_from_config() {
        let config = ChromeConfig::default();
        let metrics = ChromeMetrics::from_config(&config, 800, 600);
        assert_eq!(metrics.width, 800);
        assert_eq!(metrics.height, 600);
        assert_eq!(metrics.titlebar_height, config.titlebar_height);
    }
}
