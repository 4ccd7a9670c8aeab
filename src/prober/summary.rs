//! Aggregate counts and the exit decision.

use crate::prober::check::serialize_secs;
use crate::prober::CheckResult;
use crate::types::RunId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::process::ExitCode;
use std::time::Duration;

/// Counts accumulated from the result stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of results observed.
    pub total_checked: usize,
    /// Number of results with `available == false`.
    pub unavailable: usize,
}

impl Summary {
    /// Fold one result into the counts.
    pub fn record(&mut self, result: &CheckResult) {
        self.total_checked += 1;
        if !result.available {
            self.unavailable += 1;
        }
    }

    /// Build a summary from a finished set of results.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a CheckResult>) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(result);
        }
        summary
    }

    pub fn available(&self) -> usize {
        self.total_checked - self.unavailable
    }

    pub fn all_available(&self) -> bool {
        self.unavailable == 0
    }

    /// Process exit status: 0 when everything was reachable, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.all_available() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Everything produced by one complete run.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub run_id: RunId,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    #[serde(rename = "timeout_secs", serialize_with = "serialize_secs")]
    pub timeout: Duration,
    pub summary: Summary,
    /// Results in completion order.
    pub results: Vec<CheckResult>,
}

impl ProbeReport {
    /// Start an empty report for a run.
    pub fn new(run_id: RunId, timeout: Duration) -> Self {
        let now = Utc::now();
        Self {
            run_id,
            started_at: now,
            finished_at: now,
            timeout,
            summary: Summary::default(),
            results: Vec::new(),
        }
    }

    /// Append a result and update the counts.
    pub fn push(&mut self, result: CheckResult) {
        self.summary.record(&result);
        self.results.push(result);
    }

    /// Stamp the completion time.
    pub fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    pub fn exit_code(&self) -> ExitCode {
        self.summary.exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::types::Endpoint;

    fn ok(addr: &str) -> CheckResult {
        CheckResult::available(Endpoint::new(addr).unwrap(), Duration::from_millis(5))
    }

    fn bad(addr: &str) -> CheckResult {
        CheckResult::unavailable(
            Endpoint::new(addr).unwrap(),
            &ProbeError::InvalidFormat,
            Duration::ZERO,
        )
    }

    #[test]
    fn test_all_available_exits_zero() {
        let results = [ok("a:1"), ok("b:2")];
        let summary = Summary::from_results(&results);
        assert_eq!(summary.total_checked, 2);
        assert_eq!(summary.unavailable, 0);
        assert_eq!(summary.exit_status(), 0);
    }

    #[test]
    fn test_any_unavailable_exits_one() {
        let results = [ok("a:1"), bad("nope"), bad("b")];
        let summary = Summary::from_results(&results);
        assert_eq!(summary.total_checked, 3);
        assert_eq!(summary.unavailable, 2);
        assert_eq!(summary.available(), 1);
        assert_eq!(summary.exit_status(), 1);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::default();
        assert!(summary.all_available());
        assert_eq!(summary.exit_status(), 0);
    }

    #[test]
    fn test_report_push_tracks_summary() {
        let mut report = ProbeReport::new(RunId::new(), Duration::from_secs(5));
        report.push(ok("a:1"));
        report.push(bad("x"));
        let report = report.finish();

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.summary.unavailable, 1);
        assert!(report.finished_at >= report.started_at);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["timeout_secs"], 5.0);
        assert_eq!(value["summary"]["total_checked"], 2);
    }
}
