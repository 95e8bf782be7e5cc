// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository mapping.
//!
//! The `_repo_mapping` runfile translates the apparent repository name used
//! by a source repository into the canonical name found in the runfiles
//! tree. Each line is `source,apparent,canonical`; a source ending in `*`
//! matches every repository with that prefix.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Rlocation path of the mapping file.
pub const REPO_MAPPING_KEY: &str = "_repo_mapping";

#[derive(Debug, Clone, PartialEq, Eq)]
struct PrefixEntry {
    source_prefix: String,
    apparent: String,
    canonical: String,
}

/// Parsed repository mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoMapping {
    exact: HashMap<(String, String), String>,
    prefixed: Vec<PrefixEntry>,
}

impl RepoMapping {
    /// Read and parse a mapping file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse mapping content. `path` is used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut mapping = Self::default();

        for (idx, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            let [source, apparent, canonical] = fields.as_slice() else {
                return Err(Error::RepoMapping {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    message: format!("expected 3 comma-separated fields, found {}", fields.len()),
                });
            };

            match source.strip_suffix('*') {
                Some(prefix) => mapping.prefixed.push(PrefixEntry {
                    source_prefix: prefix.to_string(),
                    apparent: apparent.to_string(),
                    canonical: canonical.to_string(),
                }),
                None => {
                    mapping.exact.insert(
                        (source.to_string(), apparent.to_string()),
                        canonical.to_string(),
                    );
                }
            }
        }

        Ok(mapping)
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.prefixed.is_empty()
    }

    /// Canonical name of `apparent` as seen from `source`.
    pub fn canonical(&self, source: &str, apparent: &str) -> Option<&str> {
        if let Some(canonical) = self.exact.get(&(source.to_string(), apparent.to_string())) {
            return Some(canonical.as_str());
        }
        self.prefixed
            .iter()
            .find(|e| e.apparent == apparent && source.starts_with(&e.source_prefix))
            .map(|e| e.canonical.as_str())
    }

    /// Rewrite the repository segment of `key` when a mapping applies.
    pub fn apply(&self, source: &str, key: &str) -> String {
        let (repo, rest) = crate::path::split_repo(key);
        match (self.canonical(source, repo), rest) {
            (Some(canonical), Some(rest)) => format!("{canonical}/{rest}"),
            (Some(canonical), None) => canonical.to_string(),
            (None, _) => key.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "repo_mapping_tests.rs"]
mod tests;
