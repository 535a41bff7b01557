//! Substitution variables: where they come from and how they are layered.

mod builder;
pub mod descriptor;
mod error;
mod source;

use std::collections::HashMap;
use std::path::Path;

use tracing::trace;

pub use builder::Vars;
pub use descriptor::DescriptorSource;
pub use error::VarsError;
pub use source::{ProcessEnv, StaticVars, VarSource};

/// Variable name to value. Built fresh for every render.
pub type VariableMap = HashMap<String, String>;

/// Returns the mapping used to render the file at `target`.
///
/// This is the place to add variables computed from the target path. It
/// currently hands the layered mapping back unchanged.
pub fn create_var_map(target: &Path, vars: VariableMap) -> VariableMap {
    trace!(target = %target.display(), count = vars.len(), "created variable map");
    vars
}
