//! TCP connect checker.
//!
//! Opens a full TCP connection through the operating system and closes it
//! straight away. Nothing is sent or received.

use crate::error::{ProbeError, ProbeResult};
use crate::prober::traits::Checker;
use crate::prober::CheckResult;
use crate::types::Endpoint;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Default per-check timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Checks availability by completing a TCP handshake.
///
/// The timeout covers name resolution and the connect itself. A zero
/// timeout is not rejected here; the connect gets a single poll before
/// the deadline fires.
#[derive(Debug, Clone)]
pub struct TcpChecker {
    timeout: Duration,
}

impl TcpChecker {
    /// Create a new TCP checker with the given per-endpoint timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Attempt to connect to a well-formed address.
    async fn attempt_connect(&self, address: &str) -> ProbeResult<TcpStream> {
        match timeout(self.timeout, TcpStream::connect(address)).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(e)) => Err(ProbeError::from_connect(e)),
            Err(_) => Err(ProbeError::Timeout(self.timeout)),
        }
    }

    async fn probe(&self, endpoint: &Endpoint) -> ProbeResult<()> {
        endpoint.validate()?;
        let stream = self.attempt_connect(endpoint.as_str()).await?;
        drop(stream);
        Ok(())
    }
}

impl Default for TcpChecker {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl Checker for TcpChecker {
    async fn check(&self, endpoint: &Endpoint) -> CheckResult {
        let start = Instant::now();
        let outcome = self.probe(endpoint).await;
        let elapsed = start.elapsed();
        let elapsed_ms = elapsed.as_millis() as u64;

        match &outcome {
            Ok(()) => debug!(address = %endpoint, elapsed_ms, "endpoint available"),
            Err(e) => debug!(address = %endpoint, elapsed_ms, error = %e, "endpoint unavailable"),
        }

        CheckResult::from_outcome(endpoint.clone(), outcome, elapsed)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prober::FailureKind;
    use tokio::net::{TcpListener, TcpSocket};

    fn ep(s: &str) -> Endpoint {
        Endpoint::new(s).unwrap()
    }

    /// Bind and immediately drop a listener to get a port nobody listens on.
    async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        port
    }

    #[tokio::test]
    async fn test_reachable_endpoint_is_available() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let checker = TcpChecker::new(Duration::from_secs(2));
        let result = checker.check(&ep(&addr.to_string())).await;

        assert!(result.available);
        assert!(result.error.is_none());
        assert_eq!(result.address.as_str(), addr.to_string());
    }

    #[tokio::test]
    async fn test_closed_port_is_unavailable() {
        let port = closed_port().await;
        let timeout = Duration::from_secs(2);
        let checker = TcpChecker::new(timeout);

        let result = checker.check(&ep(&format!("127.0.0.1:{}", port))).await;

        assert!(!result.available);
        assert!(result.error.is_some());
        assert!(matches!(
            result.kind,
            Some(FailureKind::Refused | FailureKind::Timeout | FailureKind::Error)
        ));
        // Bounded above by the timeout, with slack for scheduling.
        assert!(result.duration <= timeout + Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_malformed_endpoint_skips_network() {
        let checker = TcpChecker::new(Duration::from_secs(5));
        let result = checker.check(&ep("not-an-address")).await;

        assert!(!result.available);
        assert_eq!(result.kind, Some(FailureKind::Malformed));
        assert_eq!(
            result.error_message(),
            "invalid address format (should be IP:port)"
        );
        assert!(result.duration < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_invalid_port_is_a_connection_error() {
        let checker = TcpChecker::new(Duration::from_secs(1));
        let result = checker.check(&ep("127.0.0.1:notaport")).await;

        assert!(!result.available);
        assert_ne!(result.kind, Some(FailureKind::Malformed));
    }

    #[tokio::test]
    async fn test_silent_listener_times_out() {
        // A backlog of one that is already full makes the kernel drop new SYNs.
        let socket = TcpSocket::new_v4().unwrap();
        socket.bind("127.0.0.1:0".parse().unwrap()).unwrap();
        let listener = socket.listen(1).unwrap();
        let addr = listener.local_addr().unwrap();

        let mut held = Vec::new();
        for _ in 0..16 {
            match timeout(Duration::from_millis(100), TcpStream::connect(addr)).await {
                Ok(Ok(stream)) => held.push(stream),
                _ => break,
            }
        }

        let limit = Duration::from_millis(300);
        let result = TcpChecker::new(limit).check(&ep(&addr.to_string())).await;

        assert!(!result.available);
        assert_eq!(result.kind, Some(FailureKind::Timeout));
        assert_eq!(result.error_message(), "i/o timeout after 0.30s");
        assert!(result.duration >= limit);
        assert!(result.duration < limit + Duration::from_millis(500));
        drop(held);
    }

    #[tokio::test]
    async fn test_zero_timeout_never_panics() {
        let checker = TcpChecker::new(Duration::ZERO);
        let result = checker.check(&ep("127.0.0.1:1")).await;
        assert!(result.duration < Duration::from_secs(1));
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(TcpChecker::default().timeout(), Duration::from_secs(5));
    }
}
