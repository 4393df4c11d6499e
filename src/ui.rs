//! Terminal output for diagnostics
//!
//! Results go to the output file; everything here is written to stderr so that
//! `--output -` stays clean.

use std::fmt::Display;

use console::Style;

/// Print a warning that does not stop the run
pub fn warn(message: impl Display) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("Warning:"),
        message
    );
}

/// Print a verbose trace line
pub fn trace(message: impl Display) {
    eprintln!("{}", Style::new().dim().apply_to(message));
}

/// Print a fatal error
pub fn error(message: impl Display) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("Error:"), message);
}
