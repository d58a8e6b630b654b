use comfort_engine::{AmbientLevel, ComfortOptions};
use serde::Deserialize;
use std::path::Path;

use super::ambient::AmbientSetting;
use super::palette::{default_palette, parse_palette, PaletteEntry};
use crate::error::ConfigError;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Default ambient light for comfort scoring (token or number)
    #[serde(default)]
    pub ambient: Option<AmbientSetting>,

    /// Whether grids include comfort scores for background/foreground pairs
    #[serde(default = "default_comfort_enabled")]
    pub comfort_enabled: bool,

    /// Palette used by `grid` and `GET /api/grid`
    #[serde(default = "default_palette")]
    pub palette: Vec<PaletteEntry>,
}

fn default_comfort_enabled() -> bool {
    true
}

impl AppConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        parse_palette(&config.palette)?;
        Ok(config)
    }

    /// Read and parse a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// path is unset, unreadable or invalid
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file configured, using defaults");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    palette = config.palette.len(),
                    comfort_enabled = config.comfort_enabled,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Configured ambient as an engine level (`None` means default)
    pub fn ambient_level(&self) -> Option<AmbientLevel> {
        self.ambient.as_ref().and_then(AmbientSetting::to_level)
    }

    /// Comfort options for the configured ambient
    pub fn comfort_options(&self) -> ComfortOptions {
        ComfortOptions::new().maybe_ambient(self.ambient_level())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ambient: None,
            comfort_enabled: true,
            palette: default_palette(),
        }
    }
}
