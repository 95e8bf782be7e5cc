// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use super::Resolution;

/// Result of `rlocate resolve -o json`.
#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    /// True when every key resolved.
    pub passed: bool,
    pub mode: &'static str,
    pub results: Vec<ResolutionOutput>,
}

/// One key in `ResolveOutput`.
#[derive(Debug, Serialize)]
pub struct ResolutionOutput {
    pub key: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&Resolution> for ResolutionOutput {
    fn from(r: &Resolution) -> Self {
        Self {
            key: r.key.clone(),
            found: r.found(),
            path: r.path.as_ref().map(|p| p.display().to_string()),
        }
    }
}

/// Build the resolve document.
pub fn resolve_output(mode: &'static str, resolutions: &[Resolution]) -> ResolveOutput {
    ResolveOutput {
        passed: resolutions.iter().all(Resolution::found),
        mode,
        results: resolutions.iter().map(Into::into).collect(),
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_resolve(&mut self, output: &ResolveOutput) -> anyhow::Result<()> {
        self.write_value(output)
    }

    /// Environment variables as a JSON object.
    pub fn write_env(&mut self, vars: &[(&str, String)]) -> anyhow::Result<()> {
        let map: BTreeMap<&str, &str> = vars.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.write_value(&map)
    }

    fn write_value(&mut self, value: &impl Serialize) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
