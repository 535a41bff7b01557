use std::path::Path;

use tracing::error;

use super::ContentError;

/// Writes `contents` to `path`, creating the file or truncating it first.
pub fn write_file(path: &Path, contents: &str) -> Result<(), ContentError> {
    std::fs::write(path, contents).map_err(|source| ContentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Best-effort [`write_file`]. Failures are logged and dropped.
pub fn store(path: &Path, contents: &str) {
    if let Err(err) = write_file(path, contents) {
        error!(path = %path.display(), error = ?err, "failed to write file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_file_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.conf");

        write_file(&path, "fresh").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_write_file_truncates_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.conf");
        std::fs::write(&path, "a much longer original body").unwrap();

        write_file(&path, "short").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_file_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("app.conf");

        let result = write_file(&path, "x");
        assert!(matches!(result, Err(ContentError::Write { .. })));
    }

    #[test]
    fn test_store_swallows_failures() {
        store(Path::new(""), "ignored");

        let dir = tempdir().unwrap();
        store(dir.path(), "cannot overwrite a directory");
        assert!(dir.path().is_dir());
    }
}
