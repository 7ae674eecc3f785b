//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Horizontal rule between hands.
pub fn write_separator(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", "-".repeat(40))
}
