//! Command-line interface module for extidy.
//!
//! With no arguments the binary enters the interactive menu. An optional
//! positional path runs a single organize pass non-interactively instead,
//! and `--dry-run` previews that pass without moving anything.

use crate::console::Console;
use crate::file_organizer::{self, OrganizeResult};
use crate::shell;
use clap::Parser;
use std::path::PathBuf;

/// Organize a directory tree by moving every file into a subfolder named
/// after its extension.
#[derive(Parser, Debug)]
#[command(name = "extidy", version)]
pub struct Args {
    /// Directory to organize. Omit to use the interactive menu.
    pub path: Option<PathBuf>,

    /// Show what would be moved without touching the tree.
    #[arg(long)]
    pub dry_run: bool,
}

/// Dispatches a parsed command line.
///
/// Interactive mode never returns an error; menu-level problems are reported
/// inside the loop and the loop continues. In one-shot mode a missing root is
/// returned to the caller.
pub fn run_cli(args: Args, console: &mut dyn Console) -> OrganizeResult<()> {
    match args.path {
        Some(path) => {
            if args.dry_run {
                file_organizer::organize_dry_run(&path, console)?;
            } else {
                file_organizer::organize(&path, console)?;
            }
            Ok(())
        }
        None => {
            shell::run(console);
            Ok(())
        }
    }
}
