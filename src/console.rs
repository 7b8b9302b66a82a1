//! Console abstraction for user interaction.
//!
//! All reading and writing done by the shell and the organizer goes through
//! the [`Console`] trait instead of touching stdin/stdout directly. This keeps
//! the menu loop and the directory walker testable without a real terminal:
//! production code uses [`StdConsole`], tests use [`MemoryConsole`] with
//! scripted input and recorded output.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A thin read-line / write-line capability injected into the shell and the
/// file organizer.
///
/// Progress reporting is part of the trait so that the real console can render
/// a progress bar while an in-memory console just records the counters.
pub trait Console {
    /// Prints `prompt` and reads one line of input.
    ///
    /// Returns `Ok(None)` when the input stream is exhausted (EOF).
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Writes an informational line.
    fn write_line(&mut self, message: &str);

    /// Writes an error line.
    fn write_error(&mut self, message: &str);

    /// Reports that `processed` of `total` files have been handled.
    fn progress(&mut self, processed: u64, total: u64);

    /// Marks the end of a progress sequence.
    fn finish_progress(&mut self);
}

/// Console backed by the process's standard streams.
///
/// Progress notices are rendered as an `indicatif` progress bar; regular
/// output written while the bar is active is routed through the bar so the
/// two don't clobber each other.
pub struct StdConsole {
    bar: Option<ProgressBar>,
}

impl StdConsole {
    pub fn new() -> Self {
        Self { bar: None }
    }

    fn make_bar(total: u64) -> ProgressBar {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        bar
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, message: &str) {
        match &self.bar {
            Some(bar) => bar.println(message),
            None => println!("{}", message),
        }
    }

    fn write_error(&mut self, message: &str) {
        match &self.bar {
            // suspend keeps errors on stderr even while the bar is drawing.
            Some(bar) => bar.suspend(|| eprintln!("{}", message)),
            None => eprintln!("{}", message),
        }
    }

    fn progress(&mut self, processed: u64, total: u64) {
        let bar = self.bar.get_or_insert_with(|| Self::make_bar(total));
        bar.set_position(processed);
    }

    fn finish_progress(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// In-memory console for tests.
///
/// Input lines are scripted up front; everything written is recorded and can
/// be inspected after the code under test has run.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    errors: Vec<String>,
    progress: Vec<(u64, u64)>,
}

impl MemoryConsole {
    /// Creates a console with no scripted input; any `read_line` call reports
    /// end of input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console that will serve the given lines, in order, to
    /// successive `read_line` calls.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// All lines written via `write_line`, plus the prompts shown by
    /// `read_line`.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// All lines written via `write_error`.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All `(processed, total)` pairs reported via `progress`.
    pub fn progress_updates(&self) -> &[(u64, u64)] {
        &self.progress
    }

    /// Returns true if any output line contains `needle`.
    pub fn output_contains(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    /// Returns true if any error line contains `needle`.
    pub fn errors_contain(&self, needle: &str) -> bool {
        self.errors.iter().any(|line| line.contains(needle))
    }
}

impl Console for MemoryConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, message: &str) {
        self.output.push(message.to_string());
    }

    fn write_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn progress(&mut self, processed: u64, total: u64) {
        self.progress.push((processed, total));
    }

    fn finish_progress(&mut self) {}
}
