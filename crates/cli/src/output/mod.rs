//! Output formatting for resolution results.

pub mod json;
pub mod text;

use std::path::PathBuf;

use crate::runfiles::{Mode, Runfiles};

/// Outcome of resolving one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub key: String,
    pub path: Option<PathBuf>,
}

impl Resolution {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Resolve every key, preserving order.
pub fn resolve_all(runfiles: &Runfiles, keys: &[String]) -> Vec<Resolution> {
    keys.iter()
        .map(|key| Resolution {
            key: key.clone(),
            path: runfiles.rlocation(key),
        })
        .collect()
}

/// Short name of the resolver mode.
pub fn mode_name(mode: &Mode) -> &'static str {
    match mode {
        Mode::Manifest(_) => "manifest",
        Mode::Directory(_) => "directory",
    }
}
