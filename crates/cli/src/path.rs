// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rlocation path validation.
//!
//! Keys are repository-relative, slash-separated and already normalized.
//! Anything that would escape the runfiles root or alias another key is
//! rejected before lookup.

/// Classification of a key handed to `rlocation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Repository-relative key, looked up in the manifest or directory.
    Relative,
    /// Absolute filesystem path, returned unchanged.
    Absolute,
}

/// Why a key was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidKey {
    Empty,
    ParentTraversal,
    CurrentDirSegment,
    EmptySegment,
}

impl std::fmt::Display for InvalidKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            InvalidKey::Empty => "path is empty",
            InvalidKey::ParentTraversal => "path contains a `..` segment",
            InvalidKey::CurrentDirSegment => "path contains a `.` segment",
            InvalidKey::EmptySegment => "path contains `//`",
        };
        f.write_str(reason)
    }
}

/// Validate a key and classify it.
pub fn classify(key: &str) -> std::result::Result<KeyKind, InvalidKey> {
    if key.is_empty() {
        return Err(InvalidKey::Empty);
    }
    if is_absolute(key) {
        return Ok(KeyKind::Absolute);
    }
    for segment in key.split('/') {
        match segment {
            ".." => return Err(InvalidKey::ParentTraversal),
            "." => return Err(InvalidKey::CurrentDirSegment),
            _ => {}
        }
    }
    if key.contains("//") {
        return Err(InvalidKey::EmptySegment);
    }
    Ok(KeyKind::Relative)
}

/// Unix absolute paths and Windows drive paths (`C:\`, `C:/`).
fn is_absolute(key: &str) -> bool {
    if key.starts_with('/') || key.starts_with('\\') {
        return true;
    }
    let bytes = key.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'/' || bytes[2] == b'\\')
}

/// Split a key into its first segment (the repository) and the remainder.
pub fn split_repo(key: &str) -> (&str, Option<&str>) {
    match key.split_once('/') {
        Some((repo, rest)) => (repo, Some(rest)),
        None => (key, None),
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
