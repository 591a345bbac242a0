//! Error types for the conversion pipeline

use std::path::PathBuf;

use thiserror::Error;

use crate::settings::SettingsError;

/// Errors that can occur while converting whitespace code to SVG
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened
    #[error("cannot open input '{}': {source}", path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input could not be read to the end
    #[error("cannot read input '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file could not be created or truncated
    #[error("cannot create output '{}': {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing or flushing the SVG markup failed
    #[error("cannot write output '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("tab scale must be a positive integer, got {0}")]
    InvalidTabScale(u32),

    #[error("block size must be a positive integer, got {0}")]
    InvalidBlockSize(u32),

    /// The settings file could not be loaded
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
}

impl Error {
    pub fn open_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenInput {
            path: path.into(),
            source,
        }
    }

    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub fn create_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateOutput {
            path: path.into(),
            source,
        }
    }

    pub fn write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }

    /// Name of the failing operation, used as a log field
    pub fn operation(&self) -> &'static str {
        match self {
            Self::OpenInput { .. } => "open input",
            Self::ReadInput { .. } => "read input",
            Self::CreateOutput { .. } => "create output",
            Self::WriteOutput { .. } => "write output",
            Self::InvalidTabScale(_) | Self::InvalidBlockSize(_) => "validate config",
            Self::Settings(_) => "load settings",
        }
    }
}
