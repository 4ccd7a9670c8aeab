//! Command-line interface for svcprobe.
//!
//! Uses `clap` derive macros for declarative argument parsing. Flag values
//! fall back to the settings file, then to built-in defaults.

use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat, Progress, ReportOptions, Reporter};
use crate::prober::{ProbeReport, Prober};
use crate::types::EndpointList;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Usage hint printed when no services are given.
pub const USAGE_HINT: &str = "Usage: svcprobe --services=IP1:port1,IP2:port2,...";

/// Usage hint followed by the flag reference.
pub fn usage() -> String {
    format!("{}\n\n{}", USAGE_HINT, Cli::command().render_help())
}

/// Check that TCP services accept connections.
///
/// Every service is checked concurrently. The exit status is 0 when all
/// services are available and 1 when any is unavailable or malformed.
#[derive(Parser, Debug)]
#[command(name = "svcprobe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Concurrent TCP service availability checker", long_about = None)]
pub struct Cli {
    /// Comma-separated list of IP:port services to check (e.g., 192.168.1.1:80,10.0.0.1:443)
    #[arg(short, long, value_name = "LIST", env = "SVCPROBE_SERVICES")]
    pub services: Option<String>,

    /// Connection timeout in seconds [default: 5]
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors, and omit the header lines
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse the services flag into endpoints, rejecting an empty list.
    pub fn endpoints(&self) -> CliResult<EndpointList> {
        let list = EndpointList::parse(self.services.as_deref().unwrap_or(""));
        if list.is_empty() {
            return Err(CliError::NoServices);
        }
        Ok(list)
    }

    /// Per-endpoint timeout: flag, then settings.
    pub fn timeout(&self, settings: &AppSettings) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(settings.default_timeout_secs))
    }

    pub fn output_format(&self, settings: &AppSettings) -> OutputFormat {
        self.output.unwrap_or(settings.default_output_format)
    }

    pub fn report_options(&self, settings: &AppSettings) -> ReportOptions {
        let format = self.output_format(settings);
        let color = format == OutputFormat::Plain
            && !self.no_color
            && console::Term::stdout().is_term()
            && console::colors_enabled();

        ReportOptions {
            format,
            color,
            banner: !self.quiet,
        }
    }

    /// Run the checks and print results to stdout.
    pub async fn execute(&self, settings: &AppSettings) -> CliResult<ProbeReport> {
        let mut reporter = output::stdout_reporter(self.report_options(settings));
        self.probe(settings, reporter.as_mut()).await
    }

    /// Run the checks, streaming each result to `reporter` as it completes.
    pub async fn probe(
        &self,
        settings: &AppSettings,
        reporter: &mut dyn Reporter,
    ) -> CliResult<ProbeReport> {
        let endpoints = self.endpoints()?;
        let prober = Prober::tcp(self.timeout(settings));

        let mut stream = prober.spawn(endpoints);
        let progress = Progress::new(stream.expected(), self.progress || settings.progress);

        reporter.begin(stream.expected())?;
        let mut report = stream.report();
        while let Some(result) = stream.next().await {
            progress.record(&result);
            progress.suspend(|| reporter.on_result(&result))?;
            report.push(result);
        }
        progress.finish();

        let report = report.finish();
        reporter.finish(&report)?;

        info!(
            run_id = %report.run_id.short(),
            checked = report.summary.total_checked,
            unavailable = report.summary.unavailable,
            "probe complete"
        );
        Ok(report)
    }
}
