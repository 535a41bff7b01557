//! Settings for the `replace-var` binary.

mod builder;
mod env;
mod error;
mod settings;

pub use builder::SettingsLoader;
pub use error::ConfigError;
pub use settings::{DescriptorSettings, LogSettings, Settings};

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "REPLACE_VAR";

/// Separator between path segments in override variable names.
pub const ENV_SEPARATOR: &str = "__";
