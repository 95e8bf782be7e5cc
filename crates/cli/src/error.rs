use std::path::PathBuf;

/// Runfiles error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither a manifest nor a runfiles directory could be discovered
    #[error("runfiles manifest not found (searched: {})", display_searched(.searched))]
    ManifestNotFound { searched: Vec<PathBuf> },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Malformed manifest line
    #[error("manifest error: {}:{line}: {message}", .path.display())]
    Manifest {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Malformed repository mapping line
    #[error("repo mapping error: {}:{line}: {message}", .path.display())]
    RepoMapping {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A required runfile could not be resolved
    #[error("runfile not found: {key}")]
    RunfileNotFound { key: String },

    /// Malformed rlocation path passed where a runfile is required
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

fn display_searched(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        return "nothing".to_string();
    }
    searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type using the runfiles Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the rlocate binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every requested runfile resolved
    Success = 0,
    /// One or more runfiles were not found
    NotFound = 1,
    /// Configuration, discovery or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::ManifestNotFound { .. }
            | Error::Config { .. }
            | Error::Manifest { .. }
            | Error::RepoMapping { .. }
            | Error::Argument(_) => ExitCode::ConfigError,
            Error::RunfileNotFound { .. } | Error::FileTooLarge { .. } => ExitCode::NotFound,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
