// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runfiles manifest parsing and lookup.
//!
//! One entry per line, `<rlocation-path> <absolute-path>`, split on the first
//! space. A line starting with a space uses the escaped form: `\s`, `\n` and
//! `\b` in the key, `\n` and `\b` in the target.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory name suffix of a runfiles tree.
pub const RUNFILES_DIR_SUFFIX: &str = ".runfiles";

/// Manifest file name inside a runfiles tree.
pub const MANIFEST_FILE_NAME: &str = "MANIFEST";

/// Suffix of a manifest placed next to the executable.
pub const MANIFEST_SUFFIX: &str = ".runfiles_manifest";

/// Parsed runfiles manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
    /// `None` targets declare empty files.
    entries: BTreeMap<String, Option<PathBuf>>,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse manifest content. `path` is used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (idx, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let (key, target) = parse_line(line).map_err(|message| Error::Manifest {
                path: path.to_path_buf(),
                line: idx + 1,
                message,
            })?;

            if let Some(previous) = entries.insert(key, target) {
                tracing::debug!(
                    manifest = %path.display(),
                    line = idx + 1,
                    previous = ?previous,
                    "duplicate manifest key, last entry wins"
                );
            }
        }

        tracing::debug!(
            manifest = %path.display(),
            entries = entries.len(),
            "loaded runfiles manifest"
        );

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Path of the manifest file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&Path>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Whether the manifest declares `key`, including empty-file entries.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Resolve `key`.
    ///
    /// Exact entries win. Otherwise the longest prefix ending on a segment
    /// boundary is resolved and the remaining segments are joined onto its
    /// target, which lets callers address files under a directory entry.
    pub fn lookup(&self, key: &str) -> Option<PathBuf> {
        if let Some(target) = self.entries.get(key) {
            return target.clone();
        }

        let mut end = key.len();
        while let Some(slash) = key[..end].rfind('/') {
            let prefix = &key[..slash];
            if let Some(Some(target)) = self.entries.get(prefix) {
                let rest = &key[slash + 1..];
                return Some(if rest.is_empty() {
                    target.clone()
                } else {
                    target.join(rest)
                });
            }
            end = slash;
        }
        None
    }

    /// The runfiles directory that accompanies this manifest, if one exists.
    ///
    /// `foo.runfiles/MANIFEST` sits inside the tree; `foo.runfiles_manifest`
    /// sits next to `foo.runfiles`.
    pub fn runfiles_dir(&self) -> Option<PathBuf> {
        let name = self.path.file_name()?.to_str()?;
        let candidate = if name == MANIFEST_FILE_NAME {
            let parent = self.path.parent()?;
            let parent_name = parent.file_name()?.to_str()?;
            if !parent_name.ends_with(RUNFILES_DIR_SUFFIX) {
                return None;
            }
            parent.to_path_buf()
        } else {
            let stem = name.strip_suffix(MANIFEST_SUFFIX)?;
            self.path
                .with_file_name(format!("{stem}{RUNFILES_DIR_SUFFIX}"))
        };
        candidate.is_dir().then_some(candidate)
    }
}

/// Split one non-empty line into key and optional target.
fn parse_line(line: &str) -> std::result::Result<(String, Option<PathBuf>), String> {
    let (escaped, body) = match line.strip_prefix(' ') {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let (raw_key, raw_target) = match body.split_once(' ') {
        Some((k, t)) => (k, t),
        None => (body, ""),
    };

    if raw_key.is_empty() {
        return Err("empty key".to_string());
    }

    let (key, target) = if escaped {
        (unescape(raw_key, true)?, unescape(raw_target, false)?)
    } else {
        (raw_key.to_string(), raw_target.to_string())
    };

    let target = (!target.is_empty()).then(|| PathBuf::from(target));
    Ok((key, target))
}

/// Undo manifest escaping. `\s` is only valid in keys.
fn unescape(raw: &str, allow_space: bool) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('b') => out.push('\\'),
            Some('s') if allow_space => out.push(' '),
            Some(other) => return Err(format!("invalid escape sequence `\\{other}`")),
            None => return Err("trailing backslash".to_string()),
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
