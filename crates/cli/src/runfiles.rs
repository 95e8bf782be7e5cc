// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The runfiles resolver.
//!
//! Loads a manifest or picks a runfiles directory once at construction,
//! then answers lookups without touching the filesystem beyond the
//! existence check of directory mode. Nothing is mutated after load, so a
//! single instance can be shared across threads.

use std::path::{Path, PathBuf};

use crate::config::RunfilesConfig;
use crate::discovery::{self, Location};
use crate::env::names;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::path::{self, KeyKind};
use crate::reader::FileReader;
use crate::repo_mapping::{REPO_MAPPING_KEY, RepoMapping};

/// How runfiles are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Keys resolve through a parsed manifest.
    Manifest(Manifest),
    /// Keys resolve relative to a directory root.
    Directory(PathBuf),
}

/// Runfiles resolver.
#[derive(Debug, Clone)]
pub struct Runfiles {
    mode: Mode,
    repo_mapping: RepoMapping,
    source_repo: String,
}

impl Runfiles {
    /// Create a resolver from the process environment.
    ///
    /// Equivalent to `Runfiles::from_config(&RunfilesConfig::from_env())`.
    pub fn create() -> Result<Self> {
        Self::from_config(&RunfilesConfig::from_env())
    }

    /// Create a resolver from an explicit configuration.
    ///
    /// Fails with `Error::ManifestNotFound` when discovery finds nothing;
    /// callers should not retry since the build step will not produce the
    /// runfiles later.
    pub fn from_config(config: &RunfilesConfig) -> Result<Self> {
        let mode = match discovery::discover(config)? {
            Location::Manifest(path) => Mode::Manifest(Manifest::load(&path)?),
            Location::Directory(root) => Mode::Directory(root),
        };

        let mut runfiles = Self {
            mode,
            repo_mapping: RepoMapping::default(),
            source_repo: config.source_repo().to_string(),
        };
        runfiles.repo_mapping = runfiles.load_repo_mapping()?;
        Ok(runfiles)
    }

    /// Resolver over an already parsed manifest, without repository mapping.
    pub fn from_manifest(manifest: Manifest) -> Self {
        Self {
            mode: Mode::Manifest(manifest),
            repo_mapping: RepoMapping::default(),
            source_repo: String::new(),
        }
    }

    /// Resolver over a directory root, without repository mapping.
    pub fn from_directory(root: impl Into<PathBuf>) -> Self {
        Self {
            mode: Mode::Directory(root.into()),
            repo_mapping: RepoMapping::default(),
            source_repo: String::new(),
        }
    }

    pub fn with_repo_mapping(mut self, repo_mapping: RepoMapping) -> Self {
        self.repo_mapping = repo_mapping;
        self
    }

    pub fn with_source_repo(mut self, source_repo: impl Into<String>) -> Self {
        self.source_repo = source_repo.into();
        self
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn repo_mapping(&self) -> &RepoMapping {
        &self.repo_mapping
    }

    pub fn source_repo(&self) -> &str {
        &self.source_repo
    }

    /// Resolve `key` from the resolver's source repository.
    ///
    /// Returns `None` when the key is invalid, missing from the manifest,
    /// or (in directory mode) absent on disk. Absolute paths are returned
    /// unchanged.
    pub fn rlocation(&self, key: impl AsRef<str>) -> Option<PathBuf> {
        self.rlocation_from(key, &self.source_repo)
    }

    /// Resolve `key` as seen from the canonical repository `source_repo`.
    pub fn rlocation_from(&self, key: impl AsRef<str>, source_repo: &str) -> Option<PathBuf> {
        let key = key.as_ref();
        match path::classify(key) {
            Err(reason) => {
                tracing::debug!(key, %reason, "invalid rlocation path");
                None
            }
            Ok(KeyKind::Absolute) => Some(PathBuf::from(key)),
            Ok(KeyKind::Relative) => {
                let mapped = self.repo_mapping.apply(source_repo, key);
                let found = self.lookup(&mapped);
                if found.is_none() {
                    tracing::debug!(key, mapped = %mapped, "runfile not found");
                }
                found
            }
        }
    }

    /// Like `rlocation`, but a miss is an `Error::RunfileNotFound` and a
    /// malformed key is an `Error::Argument`.
    pub fn require(&self, key: impl AsRef<str>) -> Result<PathBuf> {
        let key = key.as_ref();
        if let Err(reason) = path::classify(key) {
            return Err(Error::Argument(format!(
                "invalid rlocation path `{key}`: {reason}"
            )));
        }
        self.rlocation(key).ok_or_else(|| Error::RunfileNotFound {
            key: key.to_string(),
        })
    }

    /// Resolve `key` and read it as UTF-8.
    pub fn read_to_string(&self, key: impl AsRef<str>) -> Result<String> {
        let path = self.require(key)?;
        FileReader::new().read_to_string(&path)
    }

    /// Variables a child process needs to find these runfiles.
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = Vec::new();
        let dir = match &self.mode {
            Mode::Manifest(manifest) => {
                vars.push((names::RUNFILES_MANIFEST_FILE, display(manifest.path())));
                manifest.runfiles_dir()
            }
            Mode::Directory(root) => Some(root.clone()),
        };
        if let Some(dir) = dir {
            let dir = display(&dir);
            vars.push((names::RUNFILES_DIR, dir.clone()));
            vars.push((names::JAVA_RUNFILES, dir));
        }
        vars
    }

    fn lookup(&self, key: &str) -> Option<PathBuf> {
        match &self.mode {
            Mode::Manifest(manifest) => manifest.lookup(key),
            Mode::Directory(root) => {
                let candidate = root.join(key);
                candidate.exists().then_some(candidate)
            }
        }
    }

    fn load_repo_mapping(&self) -> Result<RepoMapping> {
        match self.lookup(REPO_MAPPING_KEY) {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading repository mapping");
                RepoMapping::load(&path)
            }
            _ => Ok(RepoMapping::default()),
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
#[path = "runfiles_tests.rs"]
mod tests;
