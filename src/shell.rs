//! Interactive menu loop.
//!
//! Presents the two-option main menu (organize a folder / exit), reads one
//! choice per prompt, and dispatches to the organizer. Anything other than a
//! recognized option number gets an "invalid choice" message and the menu is
//! shown again. End of input is treated like choosing exit, so the loop
//! cannot spin on a closed stdin.

use crate::console::Console;
use crate::file_organizer;
use crate::output;
use std::path::Path;

/// Runs the menu loop until the user chooses to exit or input ends.
pub fn run(console: &mut dyn Console) {
    console.write_line(&output::banner("Welcome to File Organizer"));

    loop {
        display_menu(console);

        let choice = match console.read_line("Enter your choice (1-2): ") {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => break,
        };

        match choice.trim() {
            "1" => handle_organize(console),
            "2" => break,
            _ => console.write_error(&output::error("Invalid choice. Please try again.")),
        }
    }

    console.write_line("\nThank you for using File Organizer. Goodbye!");
}

fn display_menu(console: &mut dyn Console) {
    console.write_line(&output::separator());
    console.write_line("Main Menu:");
    console.write_line("1. Organize Files in a Folder");
    console.write_line("2. Exit");
    console.write_line(&output::separator());
}

/// Prompts for a root path and runs one organize pass over it.
///
/// The whole trimmed line is taken as the path rather than a single
/// whitespace-delimited token; token reading would silently truncate any
/// path containing a space, and no valid path is lost by reading the full
/// line. A missing root is reported here and control returns to the menu.
fn handle_organize(console: &mut dyn Console) {
    let path = match console.read_line("Enter the folder path: ") {
        Ok(Some(line)) => line.trim().to_string(),
        Ok(None) | Err(_) => return,
    };

    if path.is_empty() {
        console.write_error(&output::error("No folder path given."));
        return;
    }

    if let Err(e) = file_organizer::organize(Path::new(&path), console) {
        console.write_error(&output::error(&e.to_string()));
    }
}
