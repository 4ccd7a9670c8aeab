//! Endpoint types and list parsing.
//!
//! An `Endpoint` is a trimmed, non-empty `host:port` string as supplied by
//! the caller. Whether it is well-formed is decided per check, not at parse
//! time, so malformed entries still produce a result.

use crate::error::{ProbeError, ProbeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A caller-supplied service address.
///
/// Construction guarantees the value is trimmed and non-empty. The
/// `host:port` shape is checked separately by [`Endpoint::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    /// Create an endpoint from raw input, returning None if it is blank.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Get the address string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the address has a host/port separator.
    ///
    /// This is a pure check; no network I/O happens here.
    pub fn validate(&self) -> ProbeResult<()> {
        if self.0.contains(':') {
            Ok(())
        } else {
            Err(ProbeError::InvalidFormat)
        }
    }

    /// Check if the address is well-formed.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered list of endpoints parsed from a comma-separated string.
///
/// Empty tokens are discarded; duplicates are kept, each is checked once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointList(Vec<Endpoint>);

impl EndpointList {
    /// Parse a comma-separated list such as `"10.0.0.1:80, 10.0.0.2:443"`.
    pub fn parse(spec: &str) -> Self {
        Self(spec.split(',').filter_map(Endpoint::new).collect())
    }

    /// Number of endpoints that will be checked.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Endpoint> {
        self.0.iter()
    }
}

impl FromStr for EndpointList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<Vec<Endpoint>> for EndpointList {
    fn from(endpoints: Vec<Endpoint>) -> Self {
        Self(endpoints)
    }
}

impl IntoIterator for EndpointList {
    type Item = Endpoint;
    type IntoIter = std::vec::IntoIter<Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EndpointList {
    type Item = &'a Endpoint;
    type IntoIter = std::slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
