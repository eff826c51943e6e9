//! Application configuration.
//!
//! Settings are read from `config.json` in the platform configuration
//! directory. The file is optional and never written by the application;
//! every field has a default so partial files are accepted.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::state::RetentionPolicy;

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_ANIMATION_SECS: f32 = 0.2;
pub const DEFAULT_OVERSCAN_PX: f32 = 200.0;
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [420.0, 720.0];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    pub retention: RetentionPolicy,
    /// Duration of the expand/collapse transition. Zero disables it.
    pub animation_secs: f32,
    /// Extra distance above and below the viewport in which rows stay
    /// materialised.
    pub overscan_px: f32,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            retention: RetentionPolicy::default(),
            animation_secs: DEFAULT_ANIMATION_SECS,
            overscan_px: DEFAULT_OVERSCAN_PX,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl AppConfig {
    /// Clamp values that would break layout or animation.
    fn sanitized(mut self) -> Self {
        if !self.animation_secs.is_finite() || self.animation_secs < 0.0 {
            self.animation_secs = DEFAULT_ANIMATION_SECS;
        }
        if !self.overscan_px.is_finite() || self.overscan_px < 0.0 {
            self.overscan_px = DEFAULT_OVERSCAN_PX;
        }
        if self.window_size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            self.window_size = DEFAULT_WINDOW_SIZE;
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from("com", "example", "conversation-viewer")
        .ok_or(ConfigError::NoConfigDir)?;
    Ok(proj.config_dir().join(CONFIG_FILE))
}

/// Load the configuration from the platform location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_path()?)
}

/// Load the configuration from `path`. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: AppConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config.sanitized())
}
