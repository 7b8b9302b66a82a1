//! File organization system for moving files into extension directories.
//!
//! This module walks a directory tree, derives an extension label for every
//! regular file, and moves each file into a label-named subfolder of its own
//! parent directory. Per-file failures are reported and skipped; a single bad
//! file never aborts the traversal.
//!
//! The walk operates on a snapshot: all regular-file paths are collected
//! before any destination folder is created, so folders created by the run
//! (and the files moved into them) are never revisited. Files whose parent
//! directory is already named exactly their label are excluded from the
//! snapshot, which makes repeated runs over an already-organized tree no-ops.

use crate::console::Console;
use crate::file_label::label_for;
use crate::folder;
use crate::output;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Represents a single file move performed during an organization run.
#[derive(Debug, Clone)]
pub struct Operation {
    /// The original path of the file before organization.
    pub original_path: PathBuf,
    /// The new path of the file after organization.
    pub new_path: PathBuf,
    /// The extension label the file was filed under.
    pub label: String,
}

/// Counters describing one organization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of regular files in the snapshot.
    pub total: usize,
    /// Files successfully moved.
    pub moved: usize,
    /// Files whose move (or destination folder creation) failed.
    pub failed: usize,
}

/// Errors that can occur during file organization operations.
#[derive(Debug)]
pub enum OrganizeError {
    /// The root path does not exist or is not a directory.
    RootNotFound { path: PathBuf },
    /// Failed to create an extension directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: io::Error,
    },
    /// Failed to move a file into its extension directory.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootNotFound { path } => {
                write!(f, "Folder does not exist: {}", path.display())
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RootNotFound { .. } => None,
            Self::DirectoryCreationFailed { source, .. } => Some(source),
            Self::FileMoveFailure { source_error, .. } => Some(source_error),
        }
    }
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Organizes every regular file under `root` into an extension-named
/// subfolder of its own parent directory.
///
/// The only fatal condition is a missing root; everything else is reported
/// per file and the traversal continues. Progress is emitted after every file
/// as a `processed/total` pair, and a completion notice is always written
/// once the snapshot has been worked through.
///
/// # Arguments
///
/// * `root` - The directory tree to organize
/// * `console` - Sink for notices, errors, and progress
///
/// # Returns
///
/// Returns the run's counters, or [`OrganizeError::RootNotFound`] if `root`
/// is not an existing directory (in which case nothing was touched).
pub fn organize(root: &Path, console: &mut dyn Console) -> OrganizeResult<RunSummary> {
    let files = snapshot_files(root, console)?;

    let mut summary = RunSummary {
        total: files.len(),
        ..RunSummary::default()
    };

    for (index, file) in files.iter().enumerate() {
        match organize_one(file, console) {
            Ok(operation) => {
                console.write_line(&output::success(&format!(
                    "Moved file: {} -> {}",
                    operation.original_path.display(),
                    operation.new_path.display()
                )));
                summary.moved += 1;
            }
            Err(e) => {
                console.write_error(&output::error(&e.to_string()));
                summary.failed += 1;
            }
        }
        console.progress((index + 1) as u64, summary.total as u64);
    }

    console.finish_progress();
    write_completion(&summary, console);
    Ok(summary)
}

/// Reports what [`organize`] would do for `root` without moving anything.
///
/// Lists each file with its destination and prints a per-label summary table.
pub fn organize_dry_run(root: &Path, console: &mut dyn Console) -> OrganizeResult<RunSummary> {
    let files = snapshot_files(root, console)?;

    if files.is_empty() {
        console.write_line("No files found to organize.");
        return Ok(RunSummary::default());
    }

    let mut label_counts: BTreeMap<String, usize> = BTreeMap::new();
    for file in &files {
        let label = label_for(file);
        console.write_line(&format!(
            " - {} -> {}/",
            file.display(),
            label
        ));
        *label_counts.entry(label).or_insert(0) += 1;
    }

    console.write_line(&output::header("DRY RUN SUMMARY"));
    console.write_line(&format!("Total files: {}", files.len()));
    for (label, count) in &label_counts {
        let file_word = if *count == 1 { "file" } else { "files" };
        console.write_line(&format!("  {}: {} {}", label, count, file_word));
    }
    console.write_line(&output::success("Dry run complete. No files were moved."));

    Ok(RunSummary {
        total: files.len(),
        ..RunSummary::default()
    })
}

/// Classifies one file, ensures its label folder, and moves it there.
///
/// When folder creation fails the move is not attempted; the file stays where
/// it is and the creation error is reported for it.
fn organize_one(file: &Path, console: &mut dyn Console) -> OrganizeResult<Operation> {
    let label = label_for(file);
    let parent = file.parent().ok_or_else(|| OrganizeError::FileMoveFailure {
        source: file.to_path_buf(),
        destination: PathBuf::from(&label),
        source_error: io::Error::new(io::ErrorKind::InvalidInput, "file has no parent directory"),
    })?;

    let destination_dir = parent.join(&label);
    folder::ensure_dir(&destination_dir, console)?;
    move_file(file, &destination_dir, &label)
}

/// Moves `file_path` into `destination_dir`, refusing to replace an existing
/// file.
///
/// `std::fs::rename` silently overwrites the destination on Unix, which would
/// lose a file on a name collision, so an existing destination is reported as
/// a move failure instead.
fn move_file(file_path: &Path, destination_dir: &Path, label: &str) -> OrganizeResult<Operation> {
    let file_name = file_path
        .file_name()
        .ok_or_else(|| OrganizeError::FileMoveFailure {
            source: file_path.to_path_buf(),
            destination: destination_dir.to_path_buf(),
            source_error: io::Error::new(
                io::ErrorKind::InvalidInput,
                "file has no name component",
            ),
        })?;

    let destination_path = destination_dir.join(file_name);

    if destination_path.exists() {
        return Err(OrganizeError::FileMoveFailure {
            source: file_path.to_path_buf(),
            destination: destination_path,
            source_error: io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination already exists",
            ),
        });
    }

    fs::rename(file_path, &destination_path).map_err(|e| OrganizeError::FileMoveFailure {
        source: file_path.to_path_buf(),
        destination: destination_path.clone(),
        source_error: e,
    })?;

    Ok(Operation {
        original_path: file_path.to_path_buf(),
        new_path: destination_path,
        label: label.to_string(),
    })
}

/// Collects the regular files to organize before any folder is created.
///
/// The snapshot doubles as the counting pass: the progress total is the
/// number of files collected here, so the final `processed` always equals it.
/// Unreadable entries are reported and skipped. Files already sitting
/// directly inside a folder named their own label are left out.
fn snapshot_files(root: &Path, console: &mut dyn Console) -> OrganizeResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(OrganizeError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    let path = entry.into_path();
                    if !already_organized(&path) {
                        files.push(path);
                    }
                }
            }
            Err(e) => {
                console.write_error(&output::error(&format!("Error reading entry: {}", e)));
            }
        }
    }
    Ok(files)
}

/// True when the file's immediate parent directory is already named exactly
/// its extension label.
fn already_organized(path: &Path) -> bool {
    let label = label_for(path);
    path.parent()
        .and_then(Path::file_name)
        .is_some_and(|name| name.to_string_lossy() == label)
}

fn write_completion(summary: &RunSummary, console: &mut dyn Console) {
    let detail = format!(
        "{} moved, {} failed ({} total)",
        summary.moved, summary.failed, summary.total
    );
    if summary.failed == 0 {
        console.write_line(&output::success(&format!(
            "File organization completed: {}",
            detail
        )));
    } else {
        console.write_line(&output::warning(&format!(
            "File organization completed with errors: {}",
            detail
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use crate::file_label::NO_EXTENSION_LABEL;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"content").expect("Failed to write test file");
        path
    }

    #[test]
    fn test_organize_moves_file_into_label_folder() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        write_file(root, "notes.txt");
        let mut console = MemoryConsole::new();

        let summary = organize(root, &mut console).expect("organize failed");

        assert_eq!(summary, RunSummary { total: 1, moved: 1, failed: 0 });
        assert!(root.join("txt").join("notes.txt").is_file());
        assert!(!root.join("notes.txt").exists());
    }

    #[test]
    fn test_organize_missing_root_is_an_error() {
        let mut console = MemoryConsole::new();
        let result = organize(Path::new("/definitely/not/here"), &mut console);

        assert!(matches!(result, Err(OrganizeError::RootNotFound { .. })));
    }

    #[test]
    fn test_organize_extensionless_file_uses_sentinel_folder() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        write_file(root, "Makefile");
        let mut console = MemoryConsole::new();

        organize(root, &mut console).expect("organize failed");

        assert!(root.join(NO_EXTENSION_LABEL).join("Makefile").is_file());
    }

    #[test]
    fn test_organize_creates_label_folders_per_parent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        let sub = root.join("sub");
        fs::create_dir(&sub).expect("Failed to create subdirectory");
        write_file(root, "a.txt");
        write_file(&sub, "d.log");
        let mut console = MemoryConsole::new();

        organize(root, &mut console).expect("organize failed");

        assert!(root.join("txt").join("a.txt").is_file());
        assert!(sub.join("log").join("d.log").is_file());
        assert!(!root.join("log").exists());
    }

    #[test]
    fn test_move_file_refuses_to_replace_existing_destination() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        let source = write_file(root, "dup.txt");
        let dest_dir = root.join("txt");
        fs::create_dir(&dest_dir).expect("Failed to create destination");
        fs::write(dest_dir.join("dup.txt"), b"older").expect("Failed to write collider");

        let result = move_file(&source, &dest_dir, "txt");

        assert!(matches!(
            result,
            Err(OrganizeError::FileMoveFailure { .. })
        ));
        assert!(source.exists());
        assert_eq!(
            fs::read(dest_dir.join("dup.txt")).expect("Failed to read collider"),
            b"older"
        );
    }

    #[test]
    fn test_collision_does_not_abort_the_run() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        write_file(root, "a.txt");
        write_file(root, "b.txt");
        let dest_dir = root.join("txt");
        fs::create_dir(&dest_dir).expect("Failed to create destination");
        fs::write(dest_dir.join("a.txt"), b"collider").expect("Failed to write collider");
        let mut console = MemoryConsole::new();

        let summary = organize(root, &mut console).expect("organize failed");

        assert_eq!(summary, RunSummary { total: 2, moved: 1, failed: 1 });
        assert!(root.join("a.txt").exists());
        assert!(dest_dir.join("b.txt").is_file());
        assert!(console.errors_contain("Failed to move"));
        assert!(console.output_contains("completed with errors"));
    }

    #[cfg(unix)]
    #[test]
    fn test_folder_creation_failure_skips_move_and_continues() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        write_file(root, "a.txt");
        write_file(root, "b.md");
        // A dangling symlink squats on the label name: ensure_dir sees the
        // path as absent but create_dir still fails with AlreadyExists, even
        // when the tests run as root (unlike permission-bit setups).
        std::os::unix::fs::symlink(root.join("missing_target"), root.join("txt"))
            .expect("Failed to create dangling symlink");
        let mut console = MemoryConsole::new();

        let summary = organize(root, &mut console).expect("organize failed");

        assert_eq!(summary, RunSummary { total: 2, moved: 1, failed: 1 });
        // The move was skipped outright; the file never left its parent.
        assert!(root.join("a.txt").is_file());
        assert!(root.join("md").join("b.md").is_file());
        assert!(console.errors_contain("Failed to create directory"));
        assert!(console.output_contains("completed with errors"));
    }

    #[test]
    fn test_progress_runs_from_one_to_total() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        write_file(root, "a.txt");
        write_file(root, "b.md");
        write_file(root, "c");
        let mut console = MemoryConsole::new();

        organize(root, &mut console).expect("organize failed");

        assert_eq!(console.progress_updates(), &[(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        write_file(root, "a.txt");
        let mut console = MemoryConsole::new();

        organize(root, &mut console).expect("First run failed");
        let summary = organize(root, &mut console).expect("Second run failed");

        assert_eq!(summary, RunSummary::default());
        assert!(root.join("txt").join("a.txt").is_file());
        assert!(!root.join("txt").join("txt").exists());
    }

    #[test]
    fn test_already_organized_detection() {
        assert!(already_organized(Path::new("/tree/txt/a.txt")));
        assert!(!already_organized(Path::new("/tree/docs/a.txt")));
        assert!(already_organized(Path::new("/tree/no_extension/README")));
    }

    #[test]
    fn test_dry_run_moves_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        write_file(root, "a.txt");
        write_file(root, "b");
        let mut console = MemoryConsole::new();

        let summary = organize_dry_run(root, &mut console).expect("dry run failed");

        assert_eq!(summary.total, 2);
        assert_eq!(summary.moved, 0);
        assert!(root.join("a.txt").exists());
        assert!(root.join("b").exists());
        assert!(!root.join("txt").exists());
        assert!(console.output_contains("Total files: 2"));
    }

    #[test]
    fn test_empty_directory_still_reports_completion() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut console = MemoryConsole::new();

        let summary = organize(temp_dir.path(), &mut console).expect("organize failed");

        assert_eq!(summary, RunSummary::default());
        assert!(console.output_contains("File organization completed"));
        assert!(console.progress_updates().is_empty());
    }
}
