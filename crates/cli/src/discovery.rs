//! Runfiles discovery.
//!
//! Turns a `RunfilesConfig` into a concrete manifest file or runfiles
//! directory. Explicit settings are tried first, then the conventional
//! locations next to the executable.

use std::path::{Path, PathBuf};

use crate::config::RunfilesConfig;
use crate::error::{Error, Result};
use crate::manifest::{MANIFEST_FILE_NAME, MANIFEST_SUFFIX, RUNFILES_DIR_SUFFIX};

/// Where the runfiles were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A manifest file mapping keys to absolute paths.
    Manifest(PathBuf),
    /// A directory whose layout mirrors the keys.
    Directory(PathBuf),
}

/// Locate the runfiles described by `config`.
///
/// Priority:
/// 1. `manifest_file` (must exist)
/// 2. `runfiles_dir` (skipped when missing)
/// 3. `<exe>.runfiles/MANIFEST`, `<exe>.runfiles_manifest`, `<exe>.runfiles/`
/// 4. An enclosing `*.runfiles` directory of the executable
pub fn discover(config: &RunfilesConfig) -> Result<Location> {
    if let Some(manifest) = &config.manifest_file {
        if manifest.is_file() {
            tracing::debug!(manifest = %manifest.display(), "using configured manifest");
            return Ok(Location::Manifest(manifest.clone()));
        }
        return Err(Error::ManifestNotFound {
            searched: vec![manifest.clone()],
        });
    }

    let mut searched = Vec::new();

    if let Some(dir) = &config.runfiles_dir {
        if dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "using configured runfiles directory");
            return Ok(Location::Directory(dir.clone()));
        }
        tracing::debug!(dir = %dir.display(), "configured runfiles directory does not exist");
        searched.push(dir.clone());
    }

    let executable = config
        .executable
        .clone()
        .or_else(|| std::env::current_exe().ok());

    if let Some(exe) = executable {
        for candidate in candidates(&exe) {
            if candidate.exists() {
                tracing::debug!(?candidate, "found runfiles next to executable");
                return Ok(candidate);
            }
            searched.push(candidate.into_path());
        }

        if let Some(dir) = enclosing_runfiles_dir(&exe) {
            tracing::debug!(dir = %dir.display(), "executable runs inside a runfiles tree");
            return Ok(Location::Directory(dir));
        }
    }

    Err(Error::ManifestNotFound { searched })
}

/// Conventional runfiles locations for `exe`, in lookup order.
pub fn candidates(exe: &Path) -> Vec<Location> {
    let tree = with_suffix(exe, RUNFILES_DIR_SUFFIX);
    vec![
        Location::Manifest(tree.join(MANIFEST_FILE_NAME)),
        Location::Manifest(with_suffix(exe, MANIFEST_SUFFIX)),
        Location::Directory(tree),
    ]
}

/// Nearest ancestor of `exe` named `*.runfiles`.
pub fn enclosing_runfiles_dir(exe: &Path) -> Option<PathBuf> {
    exe.ancestors()
        .skip(1)
        .find(|dir| {
            dir.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(RUNFILES_DIR_SUFFIX))
                && dir.is_dir()
        })
        .map(Path::to_path_buf)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

impl Location {
    /// Whether the location is present on disk with the expected kind.
    pub fn exists(&self) -> bool {
        match self {
            Location::Manifest(p) => p.is_file(),
            Location::Directory(p) => p.is_dir(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Location::Manifest(p) | Location::Directory(p) => p,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            Location::Manifest(p) | Location::Directory(p) => p,
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
