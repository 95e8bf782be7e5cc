// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{self, RunfilesConfig};
use crate::env::names;
use crate::error::Result;

/// Resolve build runfiles from a manifest or runfiles directory
#[derive(Parser)]
#[command(name = "rlocate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = names::RLOCATE_CONFIG)]
    pub config: Option<PathBuf>,

    /// Runfiles manifest file (overrides RUNFILES_MANIFEST_FILE)
    #[arg(long, global = true, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Runfiles directory (overrides RUNFILES_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub runfiles_dir: Option<PathBuf>,

    /// Executable whose runfiles to search
    #[arg(long, global = true, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Canonical repository the lookups are made from
    #[arg(long, global = true, value_name = "NAME")]
    pub source_repo: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the absolute path of each runfile
    Resolve(ResolveArgs),
    /// Print the content of a runfile
    Cat(CatArgs),
    /// Print the environment a child process needs to find these runfiles
    Env(EnvArgs),
}

#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Rlocation paths to resolve
    #[arg(value_name = "KEY", required = true)]
    pub keys: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct CatArgs {
    /// Rlocation path to print
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Trim surrounding whitespace
    #[arg(long)]
    pub trim: bool,
}

#[derive(clap::Args)]
pub struct EnvArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Values given on the command line.
    pub fn overrides(&self) -> RunfilesConfig {
        RunfilesConfig {
            manifest_file: self.manifest.clone(),
            runfiles_dir: self.runfiles_dir.clone(),
            executable: self.executable.clone(),
            source_repo: self.source_repo.clone(),
        }
    }

    /// Layered configuration: config file, then `env`, then flags.
    pub fn runfiles_config(&self, env: RunfilesConfig) -> Result<RunfilesConfig> {
        let base = match &self.config {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                config::load(path)?
            }
            None => RunfilesConfig::default(),
        };
        Ok(base.merge(env).merge(self.overrides()))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
