//! Settings file support
//!
//! A TOML file can provide any subset of the command line options. Values
//! given explicitly on the command line win over the file, and the file
//! wins over built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::color::{ColorError, HexColor};
use crate::Config;

/// Errors that can occur when loading or parsing a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid color: {0}")]
    Color(#[from] ColorError),
}

/// Settings loaded from a TOML file, every key optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub colors: ColorSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    pub path: Option<PathBuf>,
    pub pretty_print: Option<bool>,
    pub standalone: Option<bool>,
}

/// Colors are kept as strings so that a bad value is reported as a color error
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorSettings {
    pub base: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSettings {
    pub tab_scale: Option<u32>,
    pub block_size: Option<u32>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay the values present in this file onto `config`
    pub fn apply(&self, mut config: Config) -> Result<Config, SettingsError> {
        if let Some(path) = &self.input.path {
            config.input = path.clone();
        }
        if let Some(path) = &self.output.path {
            config.output = path.clone();
        }

        let render = &mut config.render;
        if let Some(pretty) = self.output.pretty_print {
            render.pretty_print = pretty;
        }
        if let Some(standalone) = self.output.standalone {
            render.standalone = standalone;
        }
        if let Some(base) = &self.colors.base {
            render.color_base = HexColor::new(base)?;
        }
        if let Some(accent) = &self.colors.accent {
            render.color_accent = HexColor::new(accent)?;
        }
        if let Some(tab_scale) = self.layout.tab_scale {
            render.tab_scale = tab_scale;
        }
        if let Some(block_size) = self.layout.block_size {
            render.block_size = block_size;
        }
        Ok(config)
    }
}
