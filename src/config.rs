// SPDX-License-Identifier: MPL-2.0
//! Engine tuning, loaded from and saved to a `toasts.toml` file.
//!
//! Everything has a sensible default; embedders that never touch this
//! module get the stock geometry and lifetime.

use crate::error::Result;
use crate::position::Insets;
use iced::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "iced_toasts";

pub const DEFAULT_MARGIN: f32 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Padding between toasts and the host window edges.
    #[serde(default)]
    pub insets: Insets,
    /// Vertical gap between stacked toasts.
    #[serde(default = "default_margin")]
    pub margin: f32,
    /// Toast window size when the caller does not request one.
    #[serde(default = "default_size")]
    pub default_size: (f32, f32),
    /// Logical path of the arrival-sound asset, handed to the embedder's
    /// chime. Absence is non-fatal.
    #[serde(default)]
    pub chime_asset: Option<PathBuf>,
}

fn default_margin() -> f32 {
    DEFAULT_MARGIN
}

fn default_size() -> (f32, f32) {
    use crate::design_tokens::sizing;
    (sizing::TOAST_WIDTH, sizing::TOAST_HEIGHT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            margin: default_margin(),
            default_size: default_size(),
            chime_asset: None,
        }
    }
}

impl Config {
    /// Default toast window size as an `iced::Size`.
    #[must_use]
    pub fn default_window_size(&self) -> Size {
        Size::new(self.default_size.0, self.default_size.1)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
