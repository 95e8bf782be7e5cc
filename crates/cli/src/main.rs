// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rlocate CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use rlocate::cli::{Cli, Command};
use rlocate::env::names;
use rlocate::error::ExitCode;
use rlocate::{Runfiles, RunfilesConfig};

mod cmd_cat;
mod cmd_env;
mod cmd_resolve;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::RLOCATE_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rlocate: {}", e);
            match e.downcast_ref::<rlocate::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Resolve(args)) => cmd_resolve::run(&cli, args),
        Some(Command::Cat(args)) => cmd_cat::run(&cli, args),
        Some(Command::Env(args)) => cmd_env::run(&cli, args),
    }
}

/// Build the resolver from config file, environment and flags.
fn open_runfiles(cli: &Cli) -> rlocate::Result<Runfiles> {
    let config = cli.runfiles_config(RunfilesConfig::from_env())?;
    tracing::debug!(?config, "resolved runfiles config");
    Runfiles::from_config(&config)
}
