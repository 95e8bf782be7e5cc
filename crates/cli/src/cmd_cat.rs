// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rlocate cat` command implementation.

use std::io::Write;

use rlocate::cli::{CatArgs, Cli};
use rlocate::error::ExitCode;

/// Run the cat command.
pub fn run(cli: &Cli, args: &CatArgs) -> anyhow::Result<ExitCode> {
    let runfiles = crate::open_runfiles(cli)?;
    let content = runfiles.read_to_string(&args.key)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.trim {
        writeln!(out, "{}", content.trim())?;
    } else {
        out.write_all(content.as_bytes())?;
    }
    out.flush()?;

    Ok(ExitCode::Success)
}
