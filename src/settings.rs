// =============================================================================
// Singleton: process-wide settings store
// =============================================================================
//
// `Settings::global()` is the single shared handle. It is created on first
// access; concurrent first accesses all observe the same instance.
// `Settings::new()` gives an independent store for injection and tests.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config_file::{self, ConfigFileError};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Setting '{0}' not found!")]
    NotFound(String),

    #[error("Setting '{key}' has an unexpected type: {source}")]
    WrongType {
        key: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    File(#[from] ConfigFileError),
}

/// Result of [`Settings::load_from_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { entries: usize },
    Missing,
}

#[derive(Debug, Default)]
pub struct Settings {
    values: Mutex<BTreeMap<String, Value>>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static Settings {
        static SETTINGS: OnceLock<Settings> = OnceLock::new();
        SETTINGS.get_or_init(|| {
            log::info!("initialising global settings");
            Settings::new()
        })
    }

    fn values(&self) -> MutexGuard<'_, BTreeMap<String, Value>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts or overwrites `key`, returning the previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values().insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Result<Value, SettingsError> {
        self.values()
            .get(key)
            .cloned()
            .ok_or_else(|| SettingsError::NotFound(key.to_string()))
    }

    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, SettingsError> {
        let value = self.get(key)?;
        serde_json::from_value(value).map_err(|source| SettingsError::WrongType {
            key: key.to_string(),
            source,
        })
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.values().remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.values().clone()
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let snapshot = self.snapshot();
        config_file::write(path, &snapshot)?;
        log::info!("saved {} settings to {}", snapshot.len(), path.display());
        Ok(())
    }

    /// Replaces every setting with the contents of `path`. A missing file
    /// leaves the current settings untouched.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<LoadOutcome, SettingsError> {
        let path = path.as_ref();
        match config_file::read_optional::<BTreeMap<String, Value>>(path)? {
            Some(loaded) => {
                let entries = loaded.len();
                *self.values() = loaded;
                log::info!("loaded {entries} settings from {}", path.display());
                Ok(LoadOutcome::Loaded { entries })
            }
            None => {
                log::warn!("Config file not found! ({})", path.display());
                Ok(LoadOutcome::Missing)
            }
        }
    }
}
