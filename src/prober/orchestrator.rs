//! Fan-out / fan-in orchestration of endpoint checks.
//!
//! One task per endpoint is spawned onto the tokio runtime. Each task writes
//! exactly one `CheckResult` into a channel owned by this invocation. A
//! supervisor waits for every task to finish and only then drops the last
//! sender, so the consumer sees the channel close exactly once, after the
//! final result.

use crate::error::ProbeError;
use crate::prober::tcp::TcpChecker;
use crate::prober::traits::SharedChecker;
use crate::prober::{CheckResult, ProbeReport};
use crate::types::{Endpoint, EndpointList, RunId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::{self, JoinSet};
use tracing::{debug, info, info_span, warn, Instrument};

/// Runs checks concurrently and streams their results.
#[derive(Clone)]
pub struct Prober {
    checker: SharedChecker,
}

impl Prober {
    /// Create a prober backed by any checker.
    pub fn new(checker: SharedChecker) -> Self {
        Self { checker }
    }

    /// Create a prober that performs TCP connect checks.
    pub fn tcp(timeout: Duration) -> Self {
        Self::new(Arc::new(TcpChecker::new(timeout)))
    }

    /// Per-check timeout of the underlying checker.
    pub fn timeout(&self) -> Duration {
        self.checker.timeout()
    }

    /// Launch one check per endpoint and return the result stream.
    ///
    /// Must be called from within a tokio runtime. Results arrive in
    /// completion order, not input order.
    pub fn spawn(&self, endpoints: EndpointList) -> ResultStream {
        let run_id = RunId::new();
        let expected = endpoints.len();
        let span = info_span!(
            "probe",
            run_id = %run_id.short(),
            endpoints = expected,
            timeout_secs = self.timeout().as_secs_f64()
        );
        info!(parent: &span, "starting checks");

        // Sized to the number of tasks so no writer ever waits for the reader.
        let (tx, rx) = mpsc::channel(expected.max(1));
        let mut tasks = JoinSet::new();
        let mut pending = HashMap::with_capacity(expected);

        for endpoint in endpoints {
            let checker = Arc::clone(&self.checker);
            let tx = tx.clone();
            let target = endpoint.clone();

            let handle = tasks.spawn(
                async move {
                    debug!(address = %target, "check started");
                    let result = checker.check(&target).await;
                    if tx.send(result).await.is_err() {
                        debug!(address = %target, "result dropped, receiver closed");
                    }
                }
                .instrument(span.clone()),
            );
            pending.insert(handle.id(), (endpoint, Instant::now()));
        }

        tokio::spawn(supervise(tasks, pending, tx).instrument(span));

        ResultStream {
            run_id,
            expected,
            timeout: self.timeout(),
            rx,
        }
    }

    /// Run every check and collect the full report.
    pub async fn run(&self, endpoints: EndpointList) -> ProbeReport {
        self.spawn(endpoints).collect().await
    }
}

/// Completion barrier: wait for all tasks, then close the channel.
///
/// A task that panics never wrote its result, so one is written for it
/// here to keep the one-result-per-endpoint guarantee.
async fn supervise(
    mut tasks: JoinSet<()>,
    mut pending: HashMap<task::Id, (Endpoint, Instant)>,
    tx: mpsc::Sender<CheckResult>,
) {
    while let Some(joined) = tasks.join_next_with_id().await {
        match joined {
            Ok((id, ())) => {
                pending.remove(&id);
            }
            Err(err) => {
                let Some((endpoint, started)) = pending.remove(&err.id()) else {
                    continue;
                };
                warn!(address = %endpoint, error = %err, "check task failed");
                let failure = ProbeError::TaskFailed(err.to_string());
                let result = CheckResult::unavailable(endpoint, &failure, started.elapsed());
                if tx.send(result).await.is_err() {
                    debug!("fallback result dropped, receiver closed");
                }
            }
        }
    }

    drop(tx);
    info!("all checks finished, result channel closed");
}

/// Receiving half of a probe run.
///
/// Yields each `CheckResult` as soon as its check completes and returns
/// `None` once every launched check has reported.
pub struct ResultStream {
    run_id: RunId,
    expected: usize,
    timeout: Duration,
    rx: mpsc::Receiver<CheckResult>,
}

impl ResultStream {
    /// Wait for the next completed result.
    pub async fn next(&mut self) -> Option<CheckResult> {
        self.rx.recv().await
    }

    /// Number of results this stream will yield.
    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Start an empty report for this run.
    pub fn report(&self) -> ProbeReport {
        ProbeReport::new(self.run_id, self.timeout)
    }

    /// Drain the stream into a finished report.
    pub async fn collect(mut self) -> ProbeReport {
        let mut report = self.report();
        while let Some(result) = self.next().await {
            report.push(result);
        }
        report.finish()
    }
}
