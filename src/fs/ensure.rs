//! Idempotent directory creation.

use crate::error::{GogError, Result};
use std::fs::DirBuilder;
use std::path::Path;

/// Permission bits for created directories (rwxr-xr-x).
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Ensure `path` exists, creating it and any missing ancestors.
///
/// Anything already present at `path` counts as success, including a regular
/// file. Callers that then create a file beneath it get the I/O error there.
///
/// # Returns
///
/// * `Ok(())` - The path exists (or was created)
/// * `Err(GogError::DirectoryCreationFailed)` - Creation failed
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder
        .create(path)
        .map_err(|source| GogError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");

        ensure_directory(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_existing_directory_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("keep.txt"), "keep").unwrap();

        ensure_directory(temp_dir.path()).unwrap();
        ensure_directory(temp_dir.path()).unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("keep.txt")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_existing_file_is_treated_as_success() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        ensure_directory(&file).unwrap();

        assert!(file.is_file());
    }

    #[test]
    fn test_creation_under_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("blocker");
        fs::write(&file, "x").unwrap();

        let err = ensure_directory(file.join("child")).unwrap_err();
        assert!(matches!(err, GogError::DirectoryCreationFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_created_directory_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("site");
        ensure_directory(&dir).unwrap();

        let mode = fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        // umask may only remove bits
        assert_eq!(mode & !DIR_MODE, 0);
        assert_ne!(mode & 0o700, 0);
    }
}
