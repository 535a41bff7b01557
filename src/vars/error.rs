use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VarsError {
    #[error("required container descriptor not found: {0}")]
    DescriptorNotFound(PathBuf),

    #[error("failed to read container descriptor '{path}': {source}")]
    DescriptorRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse container descriptor: {0}")]
    DescriptorParse(#[from] serde_json::Error),

    #[error("invalid container descriptor: no entries")]
    InvalidDescriptor,
}
