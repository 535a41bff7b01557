use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{ConfigError, SettingsLoader, ENV_PREFIX, ENV_SEPARATOR};
use crate::vars::descriptor::DOCKERENV_PATH;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub descriptor: DescriptorSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    pub ansi: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DescriptorSettings {
    /// Merge descriptor entries beneath the process environment.
    pub enabled: bool,
    pub path: PathBuf,
    /// Fail when the descriptor is missing instead of skipping it.
    pub required: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl Default for DescriptorSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from(DOCKERENV_PATH),
            required: false,
        }
    }
}

impl Settings {
    /// Loads settings from defaults, an optional file, then `REPLACE_VAR__*`
    /// environment overrides.
    ///
    /// A file passed explicitly must exist.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut loader = SettingsLoader::new();
        if let Some(path) = file {
            loader = loader.with_file(path, true);
        }
        loader.with_env(ENV_PREFIX, ENV_SEPARATOR).build()
    }
}
