//! Console status lines.
//!
//! The log file carries the full tracing output; the console speaks the
//! short `[OK]` / `[XX]` / `[--]` vocabulary operators already grep for.
//! Failures always print (to stderr), even in quiet mode.

use std::io::{self, IsTerminal};

use owo_colors::OwoColorize;

use crate::cli::ColorMode;

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Status-line printer bound to the run's color/quiet settings.
pub struct Status {
    color: bool,
    quiet: bool,
}

impl Status {
    pub fn new(mode: &ColorMode, quiet: bool) -> Self {
        Self {
            color: should_color(mode),
            quiet,
        }
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// `[OK] ...` -- a step completed.
    pub fn ok(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            println!("[{}] {message}", "OK".green());
        } else {
            println!("[OK] {message}");
        }
    }

    /// `[XX] ...` -- a step failed. Printed regardless of quiet mode.
    pub fn fail(&self, message: &str) {
        if self.color {
            eprintln!("[{}] {message}", "XX".red());
        } else {
            eprintln!("[XX] {message}");
        }
    }

    /// `[--] ...` -- neutral progress/informational line.
    pub fn note(&self, message: &str) {
        if self.quiet {
            return;
        }
        println!("[--] {message}");
    }
}
