//! Error types for svcprobe.
//!
//! Uses `thiserror` for ergonomic error definitions. `ProbeError` never
//! escapes the prober: every variant is turned into `CheckResult` data.

use crate::prober::FailureKind;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Message reported for endpoints without a `host:port` separator.
pub const INVALID_FORMAT_MESSAGE: &str = "invalid address format (should be IP:port)";

/// Failure of a single endpoint check.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("invalid address format (should be IP:port)")]
    InvalidFormat,

    #[error("i/o timeout after {:.2}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("{0}")]
    ConnectionRefused(io::Error),

    #[error("{0}")]
    Unreachable(io::Error),

    #[error("{0}")]
    Connect(io::Error),

    #[error("check task failed: {0}")]
    TaskFailed(String),
}

impl ProbeError {
    /// Classify an I/O error returned by the connect call.
    pub fn from_connect(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::ConnectionRefused => Self::ConnectionRefused(err),
            _ => {
                if err.to_string().to_lowercase().contains("unreachable") {
                    Self::Unreachable(err)
                } else {
                    Self::Connect(err)
                }
            }
        }
    }

    /// Coarse failure category reported alongside the message.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidFormat => FailureKind::Malformed,
            Self::Timeout(_) => FailureKind::Timeout,
            Self::ConnectionRefused(_) => FailureKind::Refused,
            Self::Unreachable(_) => FailureKind::Unreachable,
            Self::Connect(_) | Self::TaskFailed(_) => FailureKind::Error,
        }
    }
}

/// Errors loading application settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {}: {}", .path.display(), .reason)]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("invalid setting: {0}")]
    InvalidValue(String),
}

/// Errors surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("No services specified")]
    NoServices,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),

    #[error("output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
