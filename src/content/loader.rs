use std::path::Path;

use tracing::{debug, error, warn};

use super::ContentError;

/// Returns `true` when the path names a YAML-family file.
///
/// The check is a case-sensitive substring match on the whole path, so
/// `conf.yaml.tpl` and `yml/app.conf` both qualify.
pub fn is_yaml_family(path: &Path) -> bool {
    let path = path.to_string_lossy();
    path.contains("yaml") || path.contains("yml")
}

/// Reads the full text of a regular file.
pub fn read_file(path: &Path) -> Result<String, ContentError> {
    if !path.is_file() {
        return Err(ContentError::NotAFile(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a file with per-line normalization applied.
///
/// YAML-family files only lose the newline characters around each line, so
/// indentation and trailing spaces survive. Every other file has each line
/// fully whitespace-trimmed. Lines left empty are dropped and the rest are
/// joined with `\n`.
pub fn read_file_trimmed(path: &Path) -> Result<String, ContentError> {
    let contents = read_file(path)?;
    let yaml = is_yaml_family(path);

    let lines: Vec<&str> = contents
        .split_inclusive('\n')
        .map(|line| {
            if yaml {
                line.trim_matches('\n')
            } else {
                line.trim()
            }
        })
        .filter(|line| !line.is_empty())
        .collect();

    Ok(lines.join("\n"))
}

/// Best-effort [`read_file`]: any failure is logged and yields `""`.
pub fn load(path: &Path) -> String {
    match read_file(path) {
        Ok(contents) => contents,
        Err(err @ ContentError::NotAFile(_)) => {
            warn!("{err}");
            String::new()
        }
        Err(err) => {
            error!(path = %path.display(), error = ?err, "failed to load file");
            String::new()
        }
    }
}

/// Best-effort [`read_file_trimmed`]: any failure yields `""`.
pub fn load_trimmed(path: &Path) -> String {
    match read_file_trimmed(path) {
        Ok(contents) => contents,
        Err(ContentError::NotAFile(_)) => {
            debug!(path = %path.display(), "skipping trimmed read of non-file path");
            String::new()
        }
        Err(err) => {
            error!(path = %path.display(), error = ?err, "failed to load file");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn temp_with(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_file_returns_full_text() {
        let file = temp_with(".conf", "  keep\r\n\n whitespace \n");
        assert_eq!(read_file(file.path()).unwrap(), "  keep\r\n\n whitespace \n");
    }

    #[test]
    fn test_read_file_missing_path() {
        let result = read_file(Path::new("/nonexistent/path/app.conf"));
        assert!(matches!(result, Err(ContentError::NotAFile(_))));
    }

    #[test]
    fn test_read_file_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_file(dir.path());
        assert!(matches!(result, Err(ContentError::NotAFile(_))));
    }

    #[test]
    fn test_read_file_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let result = read_file(file.path());
        assert!(matches!(result, Err(ContentError::Read { .. })));
        assert_eq!(load(file.path()), "");
    }

    #[test]
    fn test_load_degrades_to_empty() {
        assert_eq!(load(Path::new("")), "");
        assert_eq!(load(Path::new("/nonexistent/path/app.conf")), "");
    }

    #[test]
    fn test_trimmed_yaml_keeps_trailing_spaces() {
        let file = temp_with(".yaml", "a: 1\n\nb: 2  \n");
        assert_eq!(read_file_trimmed(file.path()).unwrap(), "a: 1\nb: 2  ");
    }

    #[test]
    fn test_trimmed_yml_keeps_indentation() {
        let file = temp_with(".yml", "root:\n  child: x\n\n");
        assert_eq!(read_file_trimmed(file.path()).unwrap(), "root:\n  child: x");
    }

    #[test]
    fn test_trimmed_non_yaml_strips_whitespace() {
        let file = temp_with(".properties", "  a = 1  \n\n  b = 2\n");
        assert_eq!(read_file_trimmed(file.path()).unwrap(), "a = 1\nb = 2");
    }

    #[test]
    fn test_trimmed_non_yaml_drops_whitespace_only_lines() {
        let file = temp_with(".conf", "x\n   \t\n\ty\n");
        assert_eq!(load_trimmed(file.path()), "x\ny");
    }

    #[test]
    fn test_load_trimmed_missing_path() {
        assert_eq!(load_trimmed(Path::new("/nonexistent/values.yaml")), "");
    }

    #[test]
    fn test_yaml_family_is_case_sensitive() {
        assert!(is_yaml_family(Path::new("deploy/values.yaml")));
        assert!(is_yaml_family(Path::new("compose.yml")));
        assert!(is_yaml_family(Path::new("yml/app.conf")));
        assert!(!is_yaml_family(Path::new("VALUES.YAML")));
        assert!(!is_yaml_family(Path::new("app.toml")));
    }
}
