// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rlocate env` command implementation.

use std::io::Write;

use rlocate::cli::{Cli, EnvArgs, OutputFormat};
use rlocate::error::ExitCode;
use rlocate::output::json::JsonFormatter;
use rlocate::output::text;

/// Run the env command.
pub fn run(cli: &Cli, args: &EnvArgs) -> anyhow::Result<ExitCode> {
    let runfiles = crate::open_runfiles(cli)?;
    let vars = runfiles.env_vars();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Text => text::write_env(&mut out, &vars)?,
        OutputFormat::Json => JsonFormatter::new(&mut out).write_env(&vars)?,
    }
    out.flush()?;

    Ok(ExitCode::Success)
}
