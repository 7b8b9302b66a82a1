//! extidy - organize a directory tree by file extension
//!
//! This library walks a directory tree and moves every regular file into a
//! subfolder of its own parent directory named after the file's extension
//! (extensionless files go into `no_extension`). It also provides the
//! interactive menu shell and the console abstraction that keeps both
//! testable without a terminal.

pub mod cli;
pub mod console;
pub mod file_label;
pub mod file_organizer;
pub mod folder;
pub mod output;
pub mod shell;

pub use cli::{Args, run_cli};
pub use console::{Console, MemoryConsole, StdConsole};
pub use file_label::{NO_EXTENSION_LABEL, label_for};
pub use file_organizer::{Operation, OrganizeError, OrganizeResult, RunSummary, organize};
