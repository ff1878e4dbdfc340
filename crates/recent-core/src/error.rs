//! Error types for configuration and matching.

use std::path::PathBuf;

use thiserror::Error;

use crate::window::MAX_YEARS;

/// Fatal configuration errors, raised before any matching starts.
#[derive(Debug, Error)]
pub enum RecentError {
    /// The time window is larger than the supported maximum.
    #[error("Maximum duration is {max} years, got roughly {years}. How old are your files?", max = MAX_YEARS)]
    DurationOverflow { years: u64 },

    /// Two flags that cannot be used together.
    #[error("{first} and {second} cannot be used together")]
    ConflictingFlags {
        first: &'static str,
        second: &'static str,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Errors for a single path or directory. These never stop a run.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Permission denied for a path.
    #[error("{}: permission denied", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("{}: no such file or directory", .path.display())]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MatchError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
