//! Reading and writing serde values as JSON or TOML, picked by file extension.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Failed to access {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot write TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// `.toml` selects TOML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Format::Toml,
            _ => Format::Json,
        }
    }

    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, ConfigFileError> {
        match self {
            Format::Json => Ok(serde_json::from_str(content)?),
            Format::Toml => Ok(toml::from_str(content)?),
        }
    }

    pub fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigFileError> {
        match self {
            Format::Json => Ok(serde_json::to_string_pretty(value)?),
            Format::Toml => Ok(toml::to_string(value)?),
        }
    }
}

/// Loads `path`, or returns `None` if it does not exist.
pub fn read_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigFileError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigFileError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    Format::from_path(path).parse(&content).map(Some)
}

pub fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigFileError> {
    let rendered = Format::from_path(path).render(value)?;
    fs::write(path, rendered).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}
