//! Sheet configuration persistence
//!
//! A `SheetConfig` bundles the panel style and the geometry formulas. It is
//! read from YAML, by default from `~/.config/flexsheet/config.yaml`:
//!
//! ```yaml
//! style:
//!   drag_sensitivity: 300
//!   allow_hide: true
//!   animation: { kind: spring, response: 0.6, damping_fraction: 0.8 }
//! geometry:
//!   minimal: { scaled: 60 }
//!   half: { fraction: 0.5 }
//!   full: { fraction: 0.9 }
//! ```
//!
//! Missing keys fall back to `PanelStyle::default_flex()` and
//! `GeometryConfig::list_layout()`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sheet::{GeometryConfig, GeometryError};
use crate::style::{PanelStyle, StyleError};

/// Configuration could not be loaded or does not describe a usable sheet
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sheet config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("invalid style: {0}")]
    Style(#[from] StyleError),
}

/// Style and geometry for one sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub style: PanelStyle,
    pub geometry: GeometryConfig,
}

impl SheetConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the style and the geometry for a viewport height without
    /// building a sheet
    pub fn validate(&self, viewport_height: f32) -> Result<(), ConfigError> {
        self.style.validate()?;
        self.geometry.resolve(viewport_height)?;
        Ok(())
    }

    /// Load config from the user config dir, or return defaults if missing or
    /// unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
