//! Runfiles resolution for build outputs.
//!
//! A build step lays out the data a binary needs either as a manifest file
//! mapping rlocation paths to absolute paths, or as a `.runfiles` directory
//! tree. [`Runfiles`] finds whichever is present and resolves keys against
//! it.
//!
//! ```no_run
//! use rlocate::Runfiles;
//!
//! let runfiles = Runfiles::create()?;
//! let data = runfiles.read_to_string("my_repo/test/data.txt")?;
//! # Ok::<(), rlocate::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod manifest;
pub mod output;
pub mod path;
pub mod reader;
pub mod repo_mapping;
pub mod runfiles;

pub use cli::{Cli, Command, OutputFormat};
pub use config::RunfilesConfig;
pub use discovery::Location;
pub use error::{Error, ExitCode, Result};
pub use manifest::Manifest;
pub use reader::FileReader;
pub use repo_mapping::RepoMapping;
pub use runfiles::{Mode, Runfiles};

/// Resolve a key from the repository of the calling crate.
///
/// The repository is taken from the compile-time `REPOSITORY_NAME`
/// variable, falling back to the main repository when it is unset.
#[macro_export]
macro_rules! rlocation {
    ($runfiles:expr, $key:expr) => {
        $runfiles.rlocation_from($key, ::core::option_env!("REPOSITORY_NAME").unwrap_or(""))
    };
}

#[cfg(test)]
pub mod test_utils;
