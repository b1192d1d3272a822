//! Output formatting for CLI.

use console::{style, Term};
use std::io::Write;

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Output handler for CLI
pub struct Output {
    term: Term,
    verbosity: Verbosity,
}

impl Output {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            term: Term::stderr(),
            verbosity,
        }
    }

    fn should_output(&self, min_verbosity: Verbosity) -> bool {
        self.verbosity >= min_verbosity
    }

    /// Write an info message
    pub fn info(&self, message: &str) {
        if self.should_output(Verbosity::Normal) {
            let _ = writeln!(&self.term, "{}", style(message).cyan());
        }
    }

    /// Write a success message
    pub fn success(&self, message: &str) {
        if self.should_output(Verbosity::Normal) {
            let _ = writeln!(&self.term, "{}", style(message).green());
        }
    }

    /// Write a warning message
    pub fn warning(&self, message: &str) {
        if self.should_output(Verbosity::Normal) {
            let _ = writeln!(&self.term, "{} {}", style("Warning:").yellow().bold(), message);
        }
    }

    /// Write an error message. Always shown.
    pub fn error(&self, message: &str) {
        let _ = writeln!(&self.term, "{} {}", style("Error:").red().bold(), message);
    }

    /// Write a verbose message
    pub fn verbose(&self, message: &str) {
        if self.should_output(Verbosity::Verbose) {
            let _ = writeln!(&self.term, "{}", style(message).dim());
        }
    }

    /// Whether progress bars may be drawn
    pub fn shows_progress(&self) -> bool {
        self.should_output(Verbosity::Normal) && self.term.is_term()
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(Verbosity::Normal)
    }
}
