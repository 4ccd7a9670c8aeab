//! CSV output formatting.

use super::{format_seconds, Reporter};
use crate::error::CliResult;
use crate::prober::{CheckResult, ProbeReport};
use std::io::Write;

/// Streams one CSV row per result.
pub struct CsvReporter<W: Write> {
    wtr: csv::Writer<W>,
}

impl<W: Write> CsvReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            wtr: csv::Writer::from_writer(out),
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> CliResult<W> {
        self.wtr
            .into_inner()
            .map_err(|e| crate::error::CliError::Io(e.into_error()))
    }
}

impl<W: Write> Reporter for CsvReporter<W> {
    fn begin(&mut self, _expected: usize) -> CliResult<()> {
        self.wtr
            .write_record(["address", "available", "error", "kind", "duration_secs"])?;
        self.wtr.flush()?;
        Ok(())
    }

    fn on_result(&mut self, result: &CheckResult) -> CliResult<()> {
        let kind = result.kind.map_or(String::new(), |k| k.to_string());
        let secs = format_seconds(result.duration);
        self.wtr.write_record([
            result.address.as_str(),
            if result.available { "true" } else { "false" },
            result.error_message(),
            kind.as_str(),
            secs.as_str(),
        ])?;
        self.wtr.flush()?;
        Ok(())
    }

    fn finish(&mut self, _report: &ProbeReport) -> CliResult<()> {
        self.wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::types::{Endpoint, RunId};
    use std::time::Duration;

    #[test]
    fn test_csv_rows() {
        let mut reporter = CsvReporter::new(Vec::new());
        let report = ProbeReport::new(RunId::new(), Duration::from_secs(1));

        reporter.begin(2).unwrap();
        reporter
            .on_result(&CheckResult::available(
                Endpoint::new("127.0.0.1:22").unwrap(),
                Duration::from_millis(10),
            ))
            .unwrap();
        reporter
            .on_result(&CheckResult::unavailable(
                Endpoint::new("bad").unwrap(),
                &ProbeError::InvalidFormat,
                Duration::ZERO,
            ))
            .unwrap();
        reporter.finish(&report).unwrap();

        let text = String::from_utf8(reporter.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "address,available,error,kind,duration_secs");
        assert_eq!(lines[1], "127.0.0.1:22,true,,,0.01");
        assert_eq!(
            lines[2],
            "bad,false,invalid address format (should be IP:port),malformed,0.00"
        );
    }
}
