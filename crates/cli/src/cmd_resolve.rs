// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rlocate resolve` command implementation.

use std::io::Write;

use rlocate::cli::{Cli, OutputFormat, ResolveArgs};
use rlocate::error::ExitCode;
use rlocate::output::json::{self, JsonFormatter};
use rlocate::output::{self, text};

/// Run the resolve command.
pub fn run(cli: &Cli, args: &ResolveArgs) -> anyhow::Result<ExitCode> {
    let runfiles = crate::open_runfiles(cli)?;
    let resolutions = output::resolve_all(&runfiles, &args.keys);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Text => text::write_resolutions(&mut out, &resolutions)?,
        OutputFormat::Json => {
            let doc = json::resolve_output(output::mode_name(runfiles.mode()), &resolutions);
            JsonFormatter::new(&mut out).write_resolve(&doc)?;
        }
    }
    out.flush()?;

    let missing: Vec<_> = resolutions.iter().filter(|r| !r.found()).collect();
    if missing.is_empty() {
        return Ok(ExitCode::Success);
    }
    if args.output == OutputFormat::Text {
        for resolution in missing {
            eprintln!("rlocate: runfile not found: {}", resolution.key);
        }
    }
    Ok(ExitCode::NotFound)
}
