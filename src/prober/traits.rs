//! Checker trait abstraction.
//!
//! The orchestrator only depends on this trait, so tests can drive it with
//! a stub instead of real sockets.

use crate::prober::CheckResult;
use crate::types::Endpoint;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// A single-endpoint availability check.
///
/// Implementations must return exactly one `CheckResult` for every call,
/// whatever happens on the network. Failures are data, never errors.
///
/// # Example
///
/// ```ignore
/// use svcprobe::prober::{Checker, TcpChecker};
/// use svcprobe::types::Endpoint;
///
/// async fn probe_one<C: Checker>(checker: &C) -> bool {
///     let ep = Endpoint::new("127.0.0.1:22").unwrap();
///     checker.check(&ep).await.available
/// }
/// ```
#[async_trait]
pub trait Checker: Send + Sync {
    /// Check one endpoint.
    async fn check(&self, endpoint: &Endpoint) -> CheckResult;

    /// Upper bound on how long one check may wait on the network.
    fn timeout(&self) -> Duration;
}

/// A shared checker for dynamic dispatch across tasks.
pub type SharedChecker = Arc<dyn Checker>;
