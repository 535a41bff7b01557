//! Strict `{{NAME}}` substitution.

mod engine;
mod error;

pub use engine::TemplateEngine;
pub use error::TemplateError;
