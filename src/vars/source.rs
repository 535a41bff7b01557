use tracing::debug;

use super::{VariableMap, VarsError};

/// A provider of substitution variables.
pub trait VarSource: Send + Sync + std::fmt::Debug {
    fn vars(&self) -> Result<VariableMap, VarsError>;
}

/// The current process environment, unfiltered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn vars(&self) -> Result<VariableMap, VarsError> {
        let mut vars = VariableMap::new();

        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    vars.insert(key, value);
                }
                (key, _) => {
                    debug!(?key, "skipping environment variable that is not valid unicode");
                }
            }
        }

        Ok(vars)
    }
}

/// A fixed set of variables supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct StaticVars(VariableMap);

impl StaticVars {
    pub fn new(vars: VariableMap) -> Self {
        Self(vars)
    }
}

impl<K, V> FromIterator<(K, V)> for StaticVars
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl VarSource for StaticVars {
    fn vars(&self) -> Result<VariableMap, VarsError> {
        Ok(self.0.clone())
    }
}
