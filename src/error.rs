use crate::template::TemplateError;
use crate::vars::VarsError;
use thiserror::Error;

/// Top-level error type for the replace-var library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("variable source error: {0}")]
    Vars(#[from] VarsError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}
