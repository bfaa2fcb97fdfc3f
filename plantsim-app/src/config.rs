use anyhow::{Context, Result};
use plantsim_core::presentation::Locale;
use serde::Deserialize;
use std::{fs, path::Path};

/// Settings for the command-line front end. The initial environment is a
/// constant and deliberately not part of this.
/// Finest grid spacing the status map accepts.
pub const MIN_MAP_RESOLUTION: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: Locale,
    pub output_dir: String,
    /// Grid spacing of the status map, in °C and % alike.
    pub map_resolution: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            output_dir: "./data/runs".to_string(),
            map_resolution: 1.0,
        }
    }
}

impl AppConfig {
    /// Loads the config file if one is given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        tracing::info!("Loading config from '{}'", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        anyhow::ensure!(
            config.map_resolution.is_finite() && config.map_resolution >= MIN_MAP_RESOLUTION,
            "map_resolution must be a number no smaller than {}",
            MIN_MAP_RESOLUTION
        );
        Ok(config)
    }
}
