//! Prober module - concurrent service availability checks.
//!
//! The pieces, bottom-up:
//!
//! - [`Endpoint::validate`](crate::types::Endpoint::validate) rejects
//!   addresses without a `host:port` separator before any I/O.
//! - [`TcpChecker`] turns one endpoint into one [`CheckResult`].
//! - [`Prober`] fans checks out onto the tokio runtime and fans results
//!   back in through a [`ResultStream`].
//! - [`Summary`] counts results and decides the process exit status.

mod check;
pub mod orchestrator;
pub mod summary;
pub mod tcp;
pub mod traits;

pub use check::{CheckResult, FailureKind};
pub use orchestrator::{Prober, ResultStream};
pub use summary::{ProbeReport, Summary};
pub use tcp::{TcpChecker, DEFAULT_TIMEOUT};
pub use traits::{Checker, SharedChecker};
