use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::env::load_env_vars;
use super::ConfigError;

/// A settings source in the loading pipeline.
#[derive(Debug)]
enum Source {
    File { path: PathBuf, required: bool },
    Env { prefix: String, separator: String },
}

/// Layers TOML files and environment overrides into a settings value.
///
/// Sources are merged in registration order, later ones overriding earlier
/// ones. Nested tables are merged recursively; other values are replaced.
///
/// ```no_run
/// use replace_var::config::{Settings, SettingsLoader};
///
/// let settings: Settings = SettingsLoader::new()
///     .with_file("/etc/replace-var.toml", false)
///     .with_env("REPLACE_VAR", "__")
///     .build()?;
/// # Ok::<(), replace_var::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct SettingsLoader {
    sources: Vec<Source>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML file. Missing optional files are skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.sources.push(Source::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Adds environment overrides such as `REPLACE_VAR__LOG__LEVEL=debug`.
    ///
    /// The prefix and separator are stripped, the remaining segments are
    /// lowercased into a table path, and `true`/`false` become booleans.
    pub fn with_env(mut self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.sources.push(Source::Env {
            prefix: prefix.into(),
            separator: separator.into(),
        });
        self
    }

    pub fn build<T: DeserializeOwned>(self) -> Result<T, ConfigError> {
        let mut merged = toml::Table::new();

        for source in self.sources {
            match source {
                Source::File { path, required } => {
                    if let Some(table) = load_settings_file(&path, required)? {
                        deep_merge(&mut merged, table);
                    }
                }
                Source::Env { prefix, separator } => {
                    load_env_vars(&mut merged, std::env::vars(), &prefix, &separator);
                }
            }
        }

        toml::Value::Table(merged)
            .try_into()
            .map_err(ConfigError::DeserializeError)
    }
}

/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
fn load_settings_file(path: &Path, required: bool) -> Result<Option<toml::Table>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let table = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(table))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn deep_merge(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
