//! Theme subsystem for Kafka Viewer
//!
//! Owns palette loading and application. Built-in "light" and "dark"
//! palettes can be overridden by `<name>.toml` files in a configured
//! directory. The chrome controller re-applies the active theme after
//! decoration-flag changes, since those can reset window-level style
//! state on some platforms.

use crate::utils::config::ThemeConfig;
use crate::utils::error::{Result, ViewerError};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Colors used by the chrome and content areas, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub window_background: String,
    pub chrome_background: String,
    pub text: String,
    pub accent: String,
    pub border: String,
}

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
}

impl Theme {
    /// Built-in themes shipped with the application.
    pub fn builtin(name: &str) -> Option<Theme> {
        let palette = match name {
            "light" => Palette {
                window_background: "#f5f5f5".to_string(),
                chrome_background: "#e8e8e8".to_string(),
                text: "#1a1a1a".to_string(),
                accent: "#2d6cdf".to_string(),
                border: "#c8c8c8".to_string(),
            },
            "dark" => Palette {
                window_background: "#1e1e1e".to_string(),
                chrome_background: "#2b2b2b".to_string(),
                text: "#e6e6e6".to_string(),
                accent: "#5a93f0".to_string(),
                border: "#3c3c3c".to_string(),
            },
            _ => return None,
        };
        Some(Theme {
            name: name.to_string(),
            palette,
        })
    }
}

/// Interface the chrome controller uses to drive theming.
///
/// Supplied at construction so the controller never reaches for a
/// global application instance.
pub trait ThemeService {
    /// Name of the active theme.
    fn current(&self) -> &str;

    /// Switch to the named theme and apply it.
    fn set_current(&mut self, name: &str) -> Result<()>;

    /// Reload and re-apply the active theme.
    fn reapply_current(&mut self) -> Result<()>;
}

/// File-backed theme manager.
pub struct ThemeManager {
    search_dir: Option<PathBuf>,
    active: Theme,
}

impl ThemeManager {
    pub fn new(config: &ThemeConfig) -> Result<Self> {
        let mut manager = Self {
            search_dir: config.search_dir.clone(),
            active: Theme::builtin("light")
                .ok_or_else(|| ViewerError::Internal("builtin light theme missing".to_string()))?,
        };
        manager.set_current(&config.name)?;
        Ok(manager)
    }

    pub fn active(&self) -> &Theme {
        &self.active
    }

    /// Load a theme by name: a file override wins over the builtin.
    fn load_theme(&self, name: &str) -> Result<Theme> {
        if let Some(dir) = &self.search_dir {
            let path = dir.join(format!("{}.toml", name));
            if path.exists() {
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    ViewerError::Theme(format!("failed to read {}: {}", path.display(), e))
                })?;
                let palette: Palette = toml::from_str(&contents).map_err(|e| {
                    ViewerError::Theme(format!("failed to parse {}: {}", path.display(), e))
                })?;
                return Ok(Theme {
                    name: name.to_string(),
                    palette,
                });
            }
        }

        Theme::builtin(name)
            .ok_or_else(|| ViewerError::Theme(format!("unknown theme '{}'", name)))
    }
}

impl ThemeService for ThemeManager {
    fn current(&self) -> &str {
        &self.active.name
    }

    fn set_current(&mut self, name: &str) -> Result<()> {
        self.active = self.load_theme(name)?;
        info!("applied theme '{}'", self.active.name);
        Ok(())
    }

    fn reapply_current(&mut self) -> Result<()> {
        let name = self.active.name.clone();
        self.active = self.load_theme(&name)?;
        Ok(())
    }
}
