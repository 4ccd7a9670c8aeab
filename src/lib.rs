//! # svcprobe - Concurrent TCP Service Availability Checks
//!
//! svcprobe takes a list of `host:port` endpoints, tries to open a TCP
//! connection to each of them in parallel within a bounded timeout, and
//! reports one result per endpoint plus a summary. The process exit status
//! makes it usable as a scripted health gate.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use svcprobe::prober::Prober;
//! use svcprobe::types::EndpointList;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let endpoints = EndpointList::parse("127.0.0.1:22, 10.0.0.1:443");
//!     let mut stream = Prober::tcp(Duration::from_secs(5)).spawn(endpoints);
//!
//!     while let Some(result) = stream.next().await {
//!         println!("{} available: {}", result.address, result.available);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Endpoint and run identifier newtypes
//! - [`prober`] - Checks, the fan-out/fan-in orchestrator and summaries
//! - [`output`] - Streaming reporters (plain, JSON, CSV)
//! - [`config`] - Optional settings file
//! - [`cli`] - Command-line front end
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod prober;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConfigError, ProbeError};
pub use prober::{CheckResult, Checker, FailureKind, ProbeReport, Prober, Summary, TcpChecker};
pub use types::{Endpoint, EndpointList, RunId};
