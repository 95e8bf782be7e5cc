// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable contract.
//!
//! The runfiles variables are a build-system convention. They are read in
//! one place (`RunfilesConfig::from_lookup`) and exported by
//! `Runfiles::env_vars`.

/// Environment variable names, generated by `build.rs`.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Read a variable, treating empty values as unset.
pub fn non_empty_var(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
