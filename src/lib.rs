pub mod config;
pub mod content;
mod error;
pub mod rewrite;
pub mod template;
pub mod vars;

pub use config::{ConfigError, Settings};
pub use content::ContentError;
pub use error::Error;
pub use rewrite::Rewriter;
pub use template::{TemplateEngine, TemplateError};
pub use vars::{VariableMap, Vars, VarsError};
