//! Path comparison helpers

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Check whether two paths point at the same filesystem location.
///
/// Both sides are canonicalized (without the `\\?\` prefix on Windows).
/// A path that does not exist is never considered equal to anything.
pub fn same_location(a: &Path, b: &Path) -> bool {
    match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Absolute, symlink-free form of an existing path.
pub fn canonical(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_same_location_identical() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("skills");
        std::fs::create_dir(&dir).unwrap();

        assert!(same_location(&dir, &dir));
        assert!(same_location(&dir, &temp.path().join("skills/../skills")));
    }

    #[test]
    fn test_same_location_different_dirs() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("a")).unwrap();
        std::fs::create_dir(temp.path().join("b")).unwrap();

        assert!(!same_location(&temp.path().join("a"), &temp.path().join("b")));
    }

    #[test]
    fn test_same_location_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        assert!(!same_location(&missing, &missing));
    }

    #[test]
    fn test_canonical_resolves_parent_components() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("skills/demo");
        std::fs::create_dir_all(&dir).unwrap();

        let resolved = canonical(&dir.join("..")).unwrap();
        assert_eq!(resolved.file_name().unwrap(), "skills");
        assert!(canonical(&temp.path().join("missing")).is_err());
    }
}
