//! Reading template files and writing rendered output back to disk.
//!
//! Each operation comes in two flavours: a fallible one returning
//! [`ContentError`], and a best-effort one that logs the failure and
//! degrades to an empty value.

mod error;
mod loader;
mod writer;

pub use error::ContentError;
pub use loader::{is_yaml_family, load, load_trimmed, read_file, read_file_trimmed};
pub use writer::{store, write_file};
