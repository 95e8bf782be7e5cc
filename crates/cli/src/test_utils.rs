//! Shared unit test utilities.
//!
//! Builds runfiles layouts in temp directories for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Data file shipped with the cross-language reader scenario.
pub const DATA_KEY: &str = "rules_rust_pyo3/test/runfiles/data.txt";

/// Content of the scenario data file, trailing newline included.
pub const DATA_CONTENT: &str = "La-Li-Lu-Le-Lo\n";

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = TempDir::new().unwrap();
/// create_tree(tmp.path(), &[
///     ("tool.runfiles/_main/data.txt", "hello"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Writes a manifest with one `key target` line per entry.
pub fn write_manifest(path: &Path, entries: &[(&str, &Path)]) {
    let content: String = entries
        .iter()
        .map(|(key, target)| format!("{} {}\n", key, target.display()))
        .collect();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A fake build output: `bin/tool` with a `bin/tool.runfiles` tree.
pub struct RunfilesTree {
    pub dir: TempDir,
}

impl RunfilesTree {
    /// Creates `bin/tool` and a runfiles tree holding `files`.
    pub fn new(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        create_tree(dir.path(), &[("bin/tool", "#!/bin/sh\n")]);
        let tree = Self { dir };
        let prefixed: Vec<(String, &str)> = files
            .iter()
            .map(|(key, content)| (format!("bin/tool.runfiles/{key}"), *content))
            .collect();
        let borrowed: Vec<(&str, &str)> =
            prefixed.iter().map(|(k, c)| (k.as_str(), *c)).collect();
        create_tree(tree.dir.path(), &borrowed);
        tree
    }

    /// Tree holding only the scenario data file.
    pub fn with_data() -> Self {
        Self::new(&[(DATA_KEY, DATA_CONTENT)])
    }

    pub fn executable(&self) -> PathBuf {
        self.dir.path().join("bin/tool")
    }

    pub fn runfiles_dir(&self) -> PathBuf {
        self.dir.path().join("bin/tool.runfiles")
    }

    /// Absolute path of `key` inside the tree.
    pub fn file(&self, key: &str) -> PathBuf {
        self.runfiles_dir().join(key)
    }

    /// Writes `tool.runfiles/MANIFEST` listing `keys` at their tree paths.
    pub fn write_inner_manifest(&self, keys: &[&str]) -> PathBuf {
        let path = self.runfiles_dir().join("MANIFEST");
        self.write_manifest_at(&path, keys);
        path
    }

    /// Writes `tool.runfiles_manifest` listing `keys` at their tree paths.
    pub fn write_sibling_manifest(&self, keys: &[&str]) -> PathBuf {
        let path = self.dir.path().join("bin/tool.runfiles_manifest");
        self.write_manifest_at(&path, keys);
        path
    }

    fn write_manifest_at(&self, path: &Path, keys: &[&str]) {
        let targets: Vec<(&str, PathBuf)> = keys.iter().map(|k| (*k, self.file(k))).collect();
        let entries: Vec<(&str, &Path)> =
            targets.iter().map(|(k, p)| (*k, p.as_path())).collect();
        write_manifest(path, &entries);
    }
}
