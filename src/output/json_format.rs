//! JSON output formatting.
//!
//! A JSON document can't be emitted incrementally, so this reporter writes
//! the whole report once the stream has closed.

use super::Reporter;
use crate::error::CliResult;
use crate::prober::{CheckResult, ProbeReport};
use std::io::Write;

pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn begin(&mut self, _expected: usize) -> CliResult<()> {
        Ok(())
    }

    fn on_result(&mut self, _result: &CheckResult) -> CliResult<()> {
        Ok(())
    }

    fn finish(&mut self, report: &ProbeReport) -> CliResult<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Endpoint, RunId};
    use std::time::Duration;

    #[test]
    fn test_json_report() {
        let run_id = RunId::new();
        let mut report = ProbeReport::new(run_id, Duration::from_secs(5));
        report.push(CheckResult::available(
            Endpoint::new("10.1.1.1:80").unwrap(),
            Duration::from_millis(250),
        ));
        let report = report.finish();

        let mut reporter = JsonReporter::new(Vec::new());
        reporter.begin(1).unwrap();
        reporter.on_result(&report.results[0]).unwrap();
        reporter.finish(&report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();
        assert_eq!(value["run_id"], run_id.to_string());
        assert_eq!(value["summary"]["total_checked"], 1);
        assert_eq!(value["summary"]["unavailable"], 0);
        assert_eq!(value["results"][0]["address"], "10.1.1.1:80");
        assert_eq!(value["results"][0]["duration_secs"], 0.25);
    }
}
