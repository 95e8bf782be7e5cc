//! Text output formatter.
//!
//! One line per result, suitable for `$(rlocate resolve ...)`:
//! ```text
//! /abs/path/to/first
//! /abs/path/to/second
//! ```
//! Missing keys produce no stdout line; the caller reports them on stderr.

use std::io::Write;

use super::Resolution;

/// Write the path of each found resolution.
pub fn write_resolutions(out: &mut impl Write, resolutions: &[Resolution]) -> std::io::Result<()> {
    for resolution in resolutions {
        if let Some(path) = &resolution.path {
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

/// Write `NAME=value` lines.
pub fn write_env(out: &mut impl Write, vars: &[(&str, String)]) -> std::io::Result<()> {
    for (name, value) in vars {
        writeln!(out, "{}={}", name, value)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
