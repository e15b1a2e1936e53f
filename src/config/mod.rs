// SPDX-License-Identifier: MPL-2.0
//! This module handles the optional `settings.toml` file that overrides the
//! built-in icon generation defaults.
//!
//! Every field is optional. Missing fields fall back to [`defaults`], and a
//! file that is not valid TOML is ignored with a warning.
//!
//! # Examples
//!
//! ```no_run
//! use icon_backdrop::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load the user configuration, if any
//! let config = config::load().unwrap_or_default();
//!
//! // Write a configuration to a specific path (e.g., for testing)
//! let mut custom = Config::default();
//! custom.background_color = Some("#000000".to_string());
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&custom, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.background_color, Some("#000000".to_string()));
//! std::fs::remove_dir_all("./temp_config_dir").unwrap();
//! ```

pub mod defaults;

use crate::domain::compositing::BackgroundColor;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IconBackdrop";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Opaque canvas fill as `#rrggbb` (`#rrggbbff` is also accepted).
    #[serde(default)]
    pub background_color: Option<String>,
    /// Edge length of the square canvas used for vector input.
    #[serde(default)]
    pub canvas_size: Option<u32>,
    #[serde(default)]
    pub scale_factor: Option<f32>,
    #[serde(default)]
    pub raster_input: Option<PathBuf>,
    #[serde(default)]
    pub vector_input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background_color: Some(DEFAULT_BACKGROUND_COLOR.to_string()),
            canvas_size: Some(DEFAULT_CANVAS_SIZE),
            scale_factor: Some(DEFAULT_SCALE_FACTOR),
            raster_input: None,
            vector_input: None,
            output: None,
        }
    }
}

impl Config {
    /// Parses the configured background color, if one is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the value is not valid hex notation or
    /// is not fully opaque.
    pub fn background(&self) -> Result<Option<BackgroundColor>> {
        self.background_color
            .as_deref()
            .map(|value| {
                value
                    .parse::<BackgroundColor>()
                    .map_err(|e| Error::Config(e.to_string()))
            })
            .transpose()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads `settings.toml` from the platform config directory, or the defaults
/// when it does not exist.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            log::debug!("Loading settings from {}", path.display());
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!(
                "Ignoring invalid settings file {}: {err}",
                path.display()
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::Config(format!("{}: {e}", parent.display())))?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
    Ok(())
}
