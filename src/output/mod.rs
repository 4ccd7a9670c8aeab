//! Output formatting module.
//!
//! A [`Reporter`] receives each `CheckResult` the moment the prober yields
//! it, then the finished report. Plain text and CSV are written as results
//! arrive; JSON is written once at the end.

mod csv_format;
mod json_format;
mod plain;
mod progress;

pub use csv_format::CsvReporter;
pub use json_format::JsonReporter;
pub use plain::{format_result, format_summary, print_error, PlainReporter};
pub use progress::Progress;

use crate::error::CliResult;
use crate::prober::{CheckResult, ProbeReport};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::time::Duration;

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines, one per endpoint
    #[default]
    Plain,
    /// A single JSON report
    Json,
    /// CSV rows, one per endpoint
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Sink for a stream of check results.
pub trait Reporter {
    /// Called once before the first result.
    fn begin(&mut self, expected: usize) -> CliResult<()>;

    /// Called for every result, in completion order.
    fn on_result(&mut self, result: &CheckResult) -> CliResult<()>;

    /// Called once after the stream has closed.
    fn finish(&mut self, report: &ProbeReport) -> CliResult<()>;
}

/// Options shared by the reporters.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Emit ANSI colors (plain format only).
    pub color: bool,
    /// Print the header and separator lines (plain format only).
    pub banner: bool,
}

/// Build a reporter writing to `out`.
pub fn reporter<W: Write + 'static>(out: W, options: ReportOptions) -> Box<dyn Reporter> {
    match options.format {
        OutputFormat::Plain => Box::new(PlainReporter::new(out, options.color, options.banner)),
        OutputFormat::Json => Box::new(JsonReporter::new(out)),
        OutputFormat::Csv => Box::new(CsvReporter::new(out)),
    }
}

/// Build a reporter writing to standard output.
pub fn stdout_reporter(options: ReportOptions) -> Box<dyn Reporter> {
    reporter(io::stdout(), options)
}

/// Seconds with two decimal places, as used in every output format.
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.2}", duration.as_secs_f64())
}
