use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::{
    core::utils::PathResolver,
    errors::{Result, TrackerError},
    storage::json_backend::{replace_file, DEFAULT_DATA_FILE},
};

/// User preferences. Every field has a default so partial files load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data file; relative paths resolve against the working directory.
    pub data_file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    pub currency_symbol: String,
    pub color: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            export_dir: None,
            currency_symbol: "₱".into(),
            color: true,
            log_level: "warn".into(),
        }
    }
}

impl Config {
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(PathResolver::working_dir)
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: PathResolver::config_file_in(&base),
        }
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path).map_err(|err| {
            TrackerError::Config(format!("cannot read {}: {err}", self.path.display()))
        })?;
        serde_json::from_str(&data).map_err(|err| {
            TrackerError::Config(format!("invalid {}: {err}", self.path.display()))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        replace_file(&self.path, &json)
    }

    /// Writes the defaults when no file exists yet so there is something to edit.
    /// Returns whether a file was created.
    pub fn ensure_file(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&Config::default())?;
        info!(path = %self.path.display(), "default configuration written");
        Ok(true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
