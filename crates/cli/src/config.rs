// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolver configuration.
//!
//! A `RunfilesConfig` names where the runfiles live. It is built in layers,
//! each overriding the previous:
//! 1. Config file (`rlocate.toml`, optional)
//! 2. Environment variables
//! 3. Explicit values (CLI flags or library callers)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::env::{names, non_empty_var};
use crate::error::{Error, Result};

/// Currently supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config file.
const KNOWN_KEYS: &[&str] = &["version", "runfiles"];

/// Known keys of the `[runfiles]` table.
const KNOWN_RUNFILES_KEYS: &[&str] = &[
    "manifest_file",
    "runfiles_dir",
    "executable",
    "source_repo",
];

/// Where to find runfiles.
///
/// Unset fields fall through to discovery: the manifest wins over the
/// directory, and both win over executable-relative lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunfilesConfig {
    /// Manifest file (`RUNFILES_MANIFEST_FILE`).
    #[serde(default)]
    pub manifest_file: Option<PathBuf>,

    /// Runfiles directory root (`RUNFILES_DIR`, then `TEST_SRCDIR`).
    #[serde(default)]
    pub runfiles_dir: Option<PathBuf>,

    /// Executable whose `.runfiles` tree is searched. Defaults to the
    /// current executable.
    #[serde(default)]
    pub executable: Option<PathBuf>,

    /// Canonical name of the repository lookups are made from. Defaults to
    /// the main repository.
    #[serde(default)]
    pub source_repo: Option<String>,
}

impl RunfilesConfig {
    /// Read the runfiles variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let runfiles_dir = non_empty_var(&lookup, names::RUNFILES_DIR)
            .or_else(|| non_empty_var(&lookup, names::TEST_SRCDIR));

        Self {
            manifest_file: non_empty_var(&lookup, names::RUNFILES_MANIFEST_FILE).map(PathBuf::from),
            runfiles_dir: runfiles_dir.map(PathBuf::from),
            executable: None,
            source_repo: None,
        }
    }

    pub fn with_manifest_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_file = Some(path.into());
        self
    }

    pub fn with_runfiles_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.runfiles_dir = Some(path.into());
        self
    }

    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    pub fn with_source_repo(mut self, repo: impl Into<String>) -> Self {
        self.source_repo = Some(repo.into());
        self
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    ///
    /// `manifest_file` and `runfiles_dir` are one location choice: when
    /// `other` sets either, both are taken from `other`.
    pub fn merge(self, other: RunfilesConfig) -> Self {
        let (manifest_file, runfiles_dir) =
            if other.manifest_file.is_some() || other.runfiles_dir.is_some() {
                (other.manifest_file, other.runfiles_dir)
            } else {
                (self.manifest_file, self.runfiles_dir)
            };
        Self {
            manifest_file,
            runfiles_dir,
            executable: other.executable.or(self.executable),
            source_repo: other.source_repo.or(self.source_repo),
        }
    }

    /// Source repository, `""` for the main repository.
    pub fn source_repo(&self) -> &str {
        self.source_repo.as_deref().unwrap_or("")
    }

    /// Resolve relative paths against `base`.
    fn anchored(mut self, base: &Path) -> Self {
        let anchor = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.manifest_file = self.manifest_file.map(anchor);
        self.runfiles_dir = self.runfiles_dir.map(anchor);
        self.executable = self.executable.map(anchor);
        self
    }
}

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config file with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    runfiles: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Load a config file, warning on unknown keys.
pub fn load(path: &Path) -> Result<RunfilesConfig> {
    let content = read(path)?;
    parse(&content, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        },
        _ => Error::io(path, e),
    })
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<RunfilesConfig> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| config_error(e, path))?;
    if version_check.version.is_none() {
        return Err(Error::Config {
            message: "missing required field: version".to_string(),
            path: Some(path.to_path_buf()),
        });
    }

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| config_error(e, path))?;
    check_version(flexible.version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let config = match flexible.runfiles {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_RUNFILES_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("runfiles.{key}"));
                }
            }
            let string = |key: &str| -> Result<Option<String>> {
                match t.get(key) {
                    None => Ok(None),
                    Some(toml::Value::String(s)) => Ok(Some(s.clone())),
                    Some(other) => Err(Error::Config {
                        message: format!(
                            "`runfiles.{}` must be a string, found {}",
                            key,
                            other.type_str()
                        ),
                        path: Some(path.to_path_buf()),
                    }),
                }
            };
            RunfilesConfig {
                manifest_file: string("manifest_file")?.map(PathBuf::from),
                runfiles_dir: string("runfiles_dir")?.map(PathBuf::from),
                executable: string("executable")?.map(PathBuf::from),
                source_repo: string("source_repo")?,
            }
        }
        Some(_) => {
            return Err(Error::Config {
                message: "`runfiles` must be a table".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
        None => RunfilesConfig::default(),
    };

    Ok(config.anchored(base_dir(path)))
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

fn config_error(e: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn base_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "rlocate: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
