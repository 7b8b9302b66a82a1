//! Extension label derivation.
//!
//! Maps a file path to the name of the subfolder it should be moved into:
//! the file's extension verbatim (no case folding), or [`NO_EXTENSION_LABEL`]
//! when there is none.
//!
//! Splitting follows `std::path::Path::extension()`: only the final suffix
//! counts (`archive.tar.gz` → `gz`) and dotfiles like `.bashrc` have no
//! extension. A trailing dot (`report.`) yields an empty extension and is
//! treated as extensionless.

use std::path::Path;

/// Destination folder name for files without an extension.
pub const NO_EXTENSION_LABEL: &str = "no_extension";

/// Derives the extension label for a file path.
///
/// # Examples
///
/// ```
/// use extidy::file_label::label_for;
/// use std::path::Path;
///
/// assert_eq!(label_for(Path::new("notes.txt")), "txt");
/// assert_eq!(label_for(Path::new("archive.tar.gz")), "gz");
/// assert_eq!(label_for(Path::new("README")), "no_extension");
/// ```
pub fn label_for(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => ext.to_string_lossy().into_owned(),
        _ => NO_EXTENSION_LABEL.to_string(),
    }
}
