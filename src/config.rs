//! Startup configuration.
//!
//! Read from an optional `eda_cars.toml` in the working directory. Every
//! field has a default, so the file may be absent or partial.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "eda_cars.toml";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Listings CSV, read once at startup.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Native window geometry.
    #[serde(default)]
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            window: WindowConfig::default(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("Usa_cars_datasets.csv")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_min_width")]
    pub min_width: f32,
    #[serde(default = "default_min_height")]
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            min_width: default_min_width(),
            min_height: default_min_height(),
        }
    }
}

fn default_width() -> f32 {
    1200.0
}

fn default_height() -> f32 {
    800.0
}

fn default_min_width() -> f32 {
    600.0
}

fn default_min_height() -> f32 {
    400.0
}

impl Config {
    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No {} found, using default configuration", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
