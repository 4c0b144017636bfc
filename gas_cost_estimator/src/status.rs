//!
//! The terminal status reporter.
//!

use colored::Colorize;

use crate::sourced::Sourced;

///
/// The terminal status reporter.
///
/// Prints cargo-style progress lines to stdout and warnings to stderr.
///
#[derive(Debug, Clone, Copy)]
pub struct Status {
    /// Whether the output is suppressed.
    quiet: bool,
}

impl Status {
    /// The width the status verb is right-aligned to.
    pub const VERB_WIDTH: usize = 12;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    ///
    /// Prints a progress line, e.g. `    Fetching ethereum price`.
    ///
    pub fn step(&self, verb: &str, subject: impl std::fmt::Display) {
        if self.quiet {
            return;
        }
        println!(
            "{} {subject}",
            format!("{verb:>width$}", width = Self::VERB_WIDTH)
                .bright_green()
                .bold()
        );
    }

    ///
    /// Prints a warning line.
    ///
    pub fn warning(&self, message: impl std::fmt::Display) {
        if self.quiet {
            return;
        }
        eprintln!("{} {message}", "Warning:".bright_yellow().bold());
    }

    ///
    /// Warns if the value had to be substituted by a fallback constant.
    ///
    pub fn fallback(&self, subject: &str, sourced: &Sourced<f64>) {
        if let Sourced::Fallback { value, reason } = sourced {
            self.warning(format!(
                "{subject} is unavailable, falling back to {value}: {reason}"
            ));
        }
    }
}
