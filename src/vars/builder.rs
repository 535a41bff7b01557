use std::path::Path;

use tracing::debug;

use super::descriptor::DescriptorSource;
use super::source::{ProcessEnv, StaticVars, VarSource};
use super::{VariableMap, VarsError};

/// Builder for the variable map a template is rendered against.
///
/// Sources are applied in registration order, so a key defined by a later
/// source overrides the same key from an earlier one.
///
/// ## Example
///
/// ```no_run
/// use replace_var::Vars;
///
/// // descriptor entries first, the live environment wins on conflicts
/// let vars = Vars::builder()
///     .with_descriptor("/.dockerenv", false)
///     .with_process_env()
///     .build()?;
/// # Ok::<(), replace_var::VarsError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Vars {
    sources: Vec<Box<dyn VarSource>>,
}

impl Vars {
    /// Creates an empty builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds every variable of the current process environment.
    pub fn with_process_env(self) -> Self {
        self.with_source(ProcessEnv)
    }

    /// Adds a container descriptor.
    ///
    /// A missing descriptor fails the build only if `required` is `true`;
    /// a corrupt one always does.
    pub fn with_descriptor(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(DescriptorSource::new(path, required))
    }

    /// Adds a fixed set of variables.
    pub fn with_vars(self, vars: VariableMap) -> Self {
        self.with_source(StaticVars::new(vars))
    }

    /// Adds any other variable source.
    pub fn with_source(mut self, source: impl VarSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Collects and layers all sources into a fresh map.
    pub fn build(&self) -> Result<VariableMap, VarsError> {
        let mut merged = VariableMap::new();

        for source in &self.sources {
            let vars = source.vars()?;
            debug!(count = vars.len(), "loaded variable source");
            merged.extend(vars);
        }

        Ok(merged)
    }
}
