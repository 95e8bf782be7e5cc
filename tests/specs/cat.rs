//! Behavioral specs for `rlocate cat`.
//!
//! The cross-language data hand-off: a file shipped by one component is
//! read back through the resolver.

use crate::prelude::*;

/// > cat prints the runfile content unchanged
#[test]
fn cat_prints_content() {
    let temp = Project::with_data();

    rlocate_cmd()
        .args(["cat", DATA_KEY])
        .env("RUNFILES_DIR", temp.runfiles_dir())
        .assert()
        .success()
        .stdout("La-Li-Lu-Le-Lo\n");
}

/// > cat --trim strips trailing whitespace
#[test]
fn cat_trim_through_manifest() {
    let temp = Project::with_data();
    temp.runfile(DATA_KEY, "La-Li-Lu-Le-Lo \n\n");
    let manifest = temp.manifest(&[DATA_KEY]);

    rlocate_cmd()
        .args(["cat", "--trim", DATA_KEY])
        .env("RUNFILES_MANIFEST_FILE", &manifest)
        .assert()
        .success()
        .stdout("La-Li-Lu-Le-Lo\n");
}

/// > cat of a missing key exits 1 naming the key
#[test]
fn cat_missing_key_fails() {
    let temp = Project::with_data();

    rlocate_cmd()
        .args(["cat", "rules_rust_pyo3/absent.txt"])
        .env("RUNFILES_DIR", temp.runfiles_dir())
        .assert()
        .code(1)
        .stderr(predicates::str::contains(
            "runfile not found: rules_rust_pyo3/absent.txt",
        ));
}

/// > cat of a malformed key is an argument error, not a miss
#[test]
fn cat_malformed_key_exits_config_error() {
    let temp = Project::with_data();

    rlocate_cmd()
        .args(["cat", "rules_rust_pyo3/../secret.txt"])
        .env("RUNFILES_DIR", temp.runfiles_dir())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid rlocation path"));
}
