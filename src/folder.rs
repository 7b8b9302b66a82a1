//! Destination folder creation.

use crate::console::Console;
use crate::file_organizer::{OrganizeError, OrganizeResult};
use crate::output;
use std::fs;
use std::path::Path;

/// Creates `path` as a directory if it does not already exist.
///
/// Creation is non-recursive: the parent must exist, which holds for every
/// caller because the path is always an existing file's parent plus one label
/// segment. Emits a creation notice only when a directory is actually
/// created, so calling this twice for the same path produces exactly one
/// notice.
pub fn ensure_dir(path: &Path, console: &mut dyn Console) -> OrganizeResult<()> {
    if path.exists() {
        return Ok(());
    }

    fs::create_dir(path).map_err(|e| OrganizeError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    console.write_line(&output::info(&format!(
        "Created folder: {}",
        path.display()
    )));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target = temp_dir.path().join("txt");
        let mut console = MemoryConsole::new();

        ensure_dir(&target, &mut console).expect("Failed to ensure directory");

        assert!(target.is_dir());
        assert!(console.output_contains("Created folder"));
    }

    #[test]
    fn test_ensure_dir_is_idempotent_with_single_notice() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target = temp_dir.path().join("pdf");
        let mut console = MemoryConsole::new();

        ensure_dir(&target, &mut console).expect("First ensure failed");
        ensure_dir(&target, &mut console).expect("Second ensure failed");

        let notices = console
            .output()
            .iter()
            .filter(|line| line.contains("Created folder"))
            .count();
        assert_eq!(notices, 1);
    }

    #[test]
    fn test_ensure_dir_fails_when_parent_is_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target = temp_dir.path().join("missing").join("txt");
        let mut console = MemoryConsole::new();

        let result = ensure_dir(&target, &mut console);

        assert!(matches!(
            result,
            Err(OrganizeError::DirectoryCreationFailed { .. })
        ));
        assert!(console.output().is_empty());
    }
}
