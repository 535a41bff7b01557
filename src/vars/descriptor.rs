//! Container environment descriptors.
//!
//! A descriptor is a JSON array of `KEY=VALUE` strings describing the
//! environment a container was launched with. Its presence at
//! [`DOCKERENV_PATH`] also marks the process as running inside a container.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::source::VarSource;
use super::{VariableMap, VarsError};

/// Well-known descriptor location.
pub const DOCKERENV_PATH: &str = "/.dockerenv";

/// Returns `true` if the well-known descriptor file exists.
pub fn is_containerized() -> bool {
    Path::new(DOCKERENV_PATH).exists()
}

/// Parses descriptor text into a variable map.
///
/// Text of two characters or fewer, or an empty array, is rejected as
/// [`VarsError::InvalidDescriptor`]. Entries without a key before the first
/// `=` are skipped; later duplicates win.
pub fn parse_descriptor(data: &str) -> Result<VariableMap, VarsError> {
    if data.trim().len() <= 2 {
        return Err(VarsError::InvalidDescriptor);
    }

    let entries: Vec<String> = serde_json::from_str(data)?;
    if entries.is_empty() {
        return Err(VarsError::InvalidDescriptor);
    }

    let mut vars = VariableMap::new();
    for entry in entries {
        match entry.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                vars.insert(key.to_string(), value.to_string());
            }
            _ => debug!(entry = %entry, "skipping malformed descriptor entry"),
        }
    }

    Ok(vars)
}

/// Reads and parses the descriptor at `path`.
pub fn read_descriptor(path: &Path) -> Result<VariableMap, VarsError> {
    let data = std::fs::read_to_string(path).map_err(|source| VarsError::DescriptorRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_descriptor(&data)
}

/// A [`VarSource`] backed by a descriptor file.
///
/// An optional descriptor that does not exist contributes no variables. A
/// descriptor that exists but is corrupt is always an error.
#[derive(Debug, Clone)]
pub struct DescriptorSource {
    path: PathBuf,
    required: bool,
}

impl DescriptorSource {
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl Default for DescriptorSource {
    fn default() -> Self {
        Self::new(DOCKERENV_PATH, false)
    }
}

impl VarSource for DescriptorSource {
    fn vars(&self) -> Result<VariableMap, VarsError> {
        match read_descriptor(&self.path) {
            Err(VarsError::DescriptorRead { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                if self.required {
                    Err(VarsError::DescriptorNotFound(self.path.clone()))
                } else {
                    debug!(path = %self.path.display(), "no container descriptor");
                    Ok(VariableMap::new())
                }
            }
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_well_formed_entries() {
        let vars = parse_descriptor(r#"["HOME=/root", "URL=http://x/?a=b"]"#).unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars["HOME"], "/root");
        assert_eq!(vars["URL"], "http://x/?a=b");
    }

    #[test]
    fn test_parse_rejects_short_content() {
        for data in ["", "[", "[]", " [] \n"] {
            let result = parse_descriptor(data);
            assert!(
                matches!(result, Err(VarsError::InvalidDescriptor)),
                "{data:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_parse_rejects_empty_array() {
        let result = parse_descriptor("[ ]");
        assert!(matches!(result, Err(VarsError::InvalidDescriptor)));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let result = parse_descriptor("HOME=/root");
        assert!(matches!(result, Err(VarsError::DescriptorParse(_))));
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let vars = parse_descriptor(r#"["A=1", "NOEQUALS", "=orphan", "B=2"]"#).unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars["A"], "1");
        assert_eq!(vars["B"], "2");
    }

    #[test]
    fn test_parse_later_duplicates_win() {
        let vars = parse_descriptor(r#"["A=first", "A=second", "EMPTY="]"#).unwrap();

        assert_eq!(vars["A"], "second");
        assert_eq!(vars["EMPTY"], "");
    }

    #[test]
    fn test_parse_only_malformed_entries_is_empty_map() {
        let vars = parse_descriptor(r#"["NOEQUALS"]"#).unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn test_source_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"["PATH=/usr/bin"]"#).unwrap();

        let vars = DescriptorSource::new(file.path(), true).vars().unwrap();
        assert_eq!(vars["PATH"], "/usr/bin");
    }

    #[test]
    fn test_source_optional_missing() {
        let vars = DescriptorSource::new("/nonexistent/.dockerenv", false)
            .vars()
            .unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn test_source_required_missing() {
        let result = DescriptorSource::new("/nonexistent/.dockerenv", true).vars();
        assert!(matches!(result, Err(VarsError::DescriptorNotFound(_))));
    }

    #[test]
    fn test_source_optional_but_corrupt() {
        let file = NamedTempFile::new().unwrap();

        let result = DescriptorSource::new(file.path(), false).vars();
        assert!(matches!(result, Err(VarsError::InvalidDescriptor)));
    }
}
