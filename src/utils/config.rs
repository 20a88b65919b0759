//! Configuration management for Kafka Viewer
//!
//! This module handles loading and managing application configuration
//! from various sources including config files and environment variables.

use crate::utils::error::{Result, ViewerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Window configuration
    pub window: WindowConfig,

    /// Chrome (title bar / resize handle) metrics
    pub chrome: ChromeConfig,

    /// Theme configuration
    pub theme: ThemeConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Initial window width
    pub width: u32,

    /// Initial window height
    pub height: u32,

    /// Window title
    pub title: String,

    /// Start with the OS native window frame instead of the custom chrome
    pub use_system_frame: bool,
}

/// Chrome metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChromeConfig {
    /// Title bar height in pixels
    pub titlebar_height: u32,

    /// Window-control button width in pixels
    pub control_size: u32,

    /// Logo edge length in pixels
    pub logo_size: u32,

    /// Resize handle thickness in pixels
    pub resize_border: u32,

    /// Double-click detection interval in milliseconds
    pub double_click_ms: u64,
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Active theme name
    pub name: String,

    /// Optional directory holding theme override files (<name>.toml)
    pub search_dir: Option<PathBuf>,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            chrome: ChromeConfig::default(),
            theme: ThemeConfig::default(),
            general: GeneralConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 640,
            title: "Kafka Viewer".to_string(),
            use_system_frame: false,
        }
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            titlebar_height: 32,
            control_size: 46,
            logo_size: 24,
            resize_border: 6,
            double_click_ms: 400,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "light".to_string(),
            search_dir: None,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. System config file (/etc/kafka-viewer/config.toml on Linux)
    /// 3. User config file (~/.config/kafka-viewer/config.toml on Linux)
    /// 4. Environment variables (KAFKA_VIEWER_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Try to load system config
        if let Some(system_path) = Self::system_config_path() {
            if system_path.exists() {
                config.merge_from_file(&system_path)?;
            }
        }

        // Try to load user config
        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config.merge_from_file(&user_path)?;
            }
        }

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to user config file
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path()
            .ok_or_else(|| ViewerError::Config("Cannot determine user config path".to_string()))?;
        self.save_to(&path)
    }

    /// Save configuration to the given path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ViewerError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, toml)
            .map_err(|e| ViewerError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Merge configuration from a TOML file
    fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ViewerError::Config(format!("Failed to read config file: {}", e)))?;

        let file_config: Config = toml::from_str(&contents)
            .map_err(|e| ViewerError::Config(format!("Failed to parse config file: {}", e)))?;

        // TODO: Implement proper merging logic instead of full replacement
        *self = file_config;

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        // Example: KAFKA_VIEWER_WINDOW_WIDTH=1920
        if let Ok(width) = std::env::var("KAFKA_VIEWER_WINDOW_WIDTH") {
            self.window.width = width
                .parse()
                .map_err(|_| ViewerError::Config("Invalid KAFKA_VIEWER_WINDOW_WIDTH".to_string()))?;
        }

        if let Ok(height) = std::env::var("KAFKA_VIEWER_WINDOW_HEIGHT") {
            self.window.height = height.parse().map_err(|_| {
                ViewerError::Config("Invalid KAFKA_VIEWER_WINDOW_HEIGHT".to_string())
            })?;
        }

        if let Ok(theme) = std::env::var("KAFKA_VIEWER_THEME") {
            self.theme.name = theme;
        }

        if let Ok(log_level) = std::env::var("KAFKA_VIEWER_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ViewerError::Config(
                "Window dimensions must be non-zero".to_string(),
            ));
        }

        if self.chrome.titlebar_height == 0 || self.chrome.control_size == 0 {
            return Err(ViewerError::Config(
                "Chrome metrics must be non-zero".to_string(),
            ));
        }

        if self.chrome.resize_border == 0 {
            return Err(ViewerError::Config(
                "Resize border must be non-zero".to_string(),
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(ViewerError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get system config file path
    fn system_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        return Some(PathBuf::from("/etc/kafka-viewer/config.toml"));

        #[cfg(target_os = "windows")]
        return std::env::var("PROGRAMDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("KafkaViewer").join("config.toml"));

        #[cfg(target_os = "macos")]
        return Some(PathBuf::from(
            "/Library/Application Support/KafkaViewer/config.toml",
        ));

        #[allow(unreachable_code)]
        None
    }

    /// Get user config file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kafka-viewer").join("config.toml"))
    }
}
