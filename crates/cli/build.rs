// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts should panic on failure — there is no meaningful recovery.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: path to the runfiles manifest file.
pub const RUNFILES_MANIFEST_FILE: &str = "RUNFILES_MANIFEST_FILE";
/// Environment variable: root of the runfiles directory tree.
pub const RUNFILES_DIR: &str = "RUNFILES_DIR";
/// Environment variable: runfiles root set by test runners.
pub const TEST_SRCDIR: &str = "TEST_SRCDIR";
/// Environment variable: legacy alias of RUNFILES_DIR, exported for JVM children.
pub const JAVA_RUNFILES: &str = "JAVA_RUNFILES";
/// Environment variable: configures tracing log filter.
pub const RLOCATE_LOG: &str = "RLOCATE_LOG";
/// Environment variable: config file for the rlocate binary.
pub const RLOCATE_CONFIG: &str = "RLOCATE_CONFIG";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
