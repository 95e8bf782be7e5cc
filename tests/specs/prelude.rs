//! Test helpers for behavioral specifications.
//!
//! Provides a runfiles layout builder and a clean `rlocate` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Key of the cross-language scenario data file.
pub const DATA_KEY: &str = "rules_rust_pyo3/test/runfiles/data.txt";

/// Variables that would leak the test runner's own runfiles into the binary.
const RUNFILES_VARS: &[&str] = &[
    "RUNFILES_MANIFEST_FILE",
    "RUNFILES_DIR",
    "TEST_SRCDIR",
    "JAVA_RUNFILES",
    "RLOCATE_CONFIG",
];

/// Returns a Command running the rlocate binary with runfiles variables cleared.
pub fn rlocate_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rlocate"));
    for var in RUNFILES_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// A temp directory laid out like build output: `bin/tool` plus
/// `bin/tool.runfiles/`.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project whose runfiles hold the scenario data file.
    pub fn with_data() -> Self {
        let temp = Self::empty();
        temp.file("bin/tool", "#!/bin/sh\n");
        temp.runfile(DATA_KEY, "La-Li-Lu-Le-Lo\n");
        temp
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Write a file inside the runfiles tree.
    pub fn runfile(&self, key: &str, content: &str) {
        self.file(&format!("bin/tool.runfiles/{key}"), content);
    }

    pub fn executable(&self) -> PathBuf {
        self.dir.path().join("bin/tool")
    }

    pub fn runfiles_dir(&self) -> PathBuf {
        self.dir.path().join("bin/tool.runfiles")
    }

    /// Absolute path of `key` inside the runfiles tree.
    pub fn runfile_path(&self, key: &str) -> PathBuf {
        self.runfiles_dir().join(key)
    }

    /// Write `bin/tool.runfiles_manifest` mapping each key into the tree.
    pub fn manifest(&self, keys: &[&str]) -> PathBuf {
        let content: String = keys
            .iter()
            .map(|k| format!("{} {}\n", k, self.runfile_path(k).display()))
            .collect();
        self.file("bin/tool.runfiles_manifest", &content);
        self.dir.path().join("bin/tool.runfiles_manifest")
    }

    /// Write `rlocate.toml` at the project root.
    pub fn config(&self, content: &str) -> PathBuf {
        self.file("rlocate.toml", content);
        self.dir.path().join("rlocate.toml")
    }
}
