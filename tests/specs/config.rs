//! Behavioral specs for configuration.
//!
//! Tests that rlocate correctly handles:
//! - `-C`/`--config` and RLOCATE_CONFIG
//! - version validation
//! - unknown keys (warned, ignored)
//! - precedence of file, environment and flags

use crate::prelude::*;

/// > A config file can name the runfiles directory, relative to itself
#[test]
fn config_file_sets_runfiles_dir() {
    let temp = Project::with_data();
    let config = temp.config("version = 1\n[runfiles]\nrunfiles_dir = \"bin/tool.runfiles\"\n");

    rlocate_cmd()
        .args(["resolve", DATA_KEY, "-C"])
        .arg(&config)
        .assert()
        .success()
        .stdout(format!("{}\n", temp.runfile_path(DATA_KEY).display()));
}

/// > RLOCATE_CONFIG sets the config file location
#[test]
fn env_config_sets_path() {
    let temp = Project::with_data();
    let config = temp.config("version = 1\n[runfiles]\nexecutable = \"bin/tool\"\n");

    rlocate_cmd()
        .args(["resolve", DATA_KEY])
        .env("RLOCATE_CONFIG", &config)
        .assert()
        .success();
}

/// > Unsupported config versions exit 2
#[test]
fn unsupported_version_exits_config_error() {
    let temp = Project::with_data();
    let config = temp.config("version = 99\n");

    rlocate_cmd()
        .args(["resolve", DATA_KEY, "-C"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 99"));
}

/// > Unknown keys are warned about and ignored
#[test]
fn unknown_keys_warn() {
    let temp = Project::with_data();
    let config = temp.config(
        "version = 1\nmystery = true\n[runfiles]\nrunfiles_dir = \"bin/tool.runfiles\"\n",
    );

    rlocate_cmd()
        .args(["resolve", DATA_KEY, "-C"])
        .arg(&config)
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `mystery`"));
}

/// > Environment overrides the config file
#[test]
fn environment_overrides_config_file() {
    let temp = Project::with_data();
    let config = temp.config("version = 1\n[runfiles]\nmanifest_file = \"missing\"\n");
    let manifest = temp.manifest(&[DATA_KEY]);

    rlocate_cmd()
        .args(["resolve", DATA_KEY, "-C"])
        .arg(&config)
        .env("RUNFILES_MANIFEST_FILE", &manifest)
        .assert()
        .success();
}

/// > RLOCATE_LOG=debug emits discovery logs on stderr
#[test]
fn log_filter_enables_debug_output() {
    let temp = Project::with_data();

    rlocate_cmd()
        .args(["resolve", DATA_KEY])
        .env("RUNFILES_DIR", temp.runfiles_dir())
        .env("RLOCATE_LOG", "debug")
        .assert()
        .success()
        .stderr(predicates::str::contains("using configured runfiles directory"));
}

/// > --runfiles-dir replaces a manifest from the environment
#[test]
fn runfiles_dir_flag_overrides_env_manifest() {
    let temp = Project::with_data();

    rlocate_cmd()
        .args(["resolve", DATA_KEY, "--runfiles-dir"])
        .arg(temp.runfiles_dir())
        .env("RUNFILES_MANIFEST_FILE", temp.path().join("stale_manifest"))
        .assert()
        .success()
        .stdout(format!("{}\n", temp.runfile_path(DATA_KEY).display()));
}

/// > RUNFILES_DIR replaces a manifest from the config file
#[test]
fn env_runfiles_dir_overrides_file_manifest() {
    let temp = Project::with_data();
    let config = temp.config("version = 1\n[runfiles]\nmanifest_file = \"missing\"\n");

    rlocate_cmd()
        .args(["resolve", DATA_KEY, "-C"])
        .arg(&config)
        .env("RUNFILES_DIR", temp.runfiles_dir())
        .assert()
        .success()
        .stdout(format!("{}\n", temp.runfile_path(DATA_KEY).display()));
}

/// > Non-string values for known keys are config errors
#[test]
fn non_string_value_exits_config_error() {
    let temp = Project::with_data();
    let config = temp.config("version = 1\n[runfiles]\nrunfiles_dir = 3\n");

    rlocate_cmd()
        .args(["resolve", DATA_KEY, "-C"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicates::str::contains("runfiles.runfiles_dir"));
}
