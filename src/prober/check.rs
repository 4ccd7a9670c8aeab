//! Per-endpoint check outcomes.

use crate::error::{ProbeError, ProbeResult};
use crate::types::Endpoint;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Why an endpoint was reported unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Address lacked a `host:port` separator; no connection was attempted.
    Malformed,
    /// The peer actively refused the connection.
    Refused,
    /// No answer within the timeout.
    Timeout,
    /// Host or network unreachable.
    Unreachable,
    /// Any other transport or resolution failure.
    Error,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed"),
            Self::Refused => write!(f, "refused"),
            Self::Timeout => write!(f, "timeout"),
            Self::Unreachable => write!(f, "unreachable"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Outcome of checking a single endpoint.
///
/// Exactly one is produced per submitted endpoint, and it is never
/// modified after creation.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// The endpoint as submitted (trimmed).
    pub address: Endpoint,
    /// Whether a TCP connection was established.
    pub available: bool,
    /// Description of the failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Failure category, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
    /// Time spent on this check.
    #[serde(rename = "duration_secs", serialize_with = "serialize_secs")]
    pub duration: Duration,
}

impl CheckResult {
    /// A successful check.
    pub fn available(address: Endpoint, duration: Duration) -> Self {
        Self {
            address,
            available: true,
            error: None,
            kind: None,
            duration,
        }
    }

    /// A failed check carrying the error's description.
    pub fn unavailable(address: Endpoint, error: &ProbeError, duration: Duration) -> Self {
        Self {
            address,
            available: false,
            error: Some(error.to_string()),
            kind: Some(error.kind()),
            duration,
        }
    }

    /// Build a result from the outcome of a check.
    pub fn from_outcome(address: Endpoint, outcome: ProbeResult<()>, duration: Duration) -> Self {
        match outcome {
            Ok(()) => Self::available(address, duration),
            Err(e) => Self::unavailable(address, &e, duration),
        }
    }

    /// Elapsed seconds, as printed in reports.
    pub fn seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

pub(crate) fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}
