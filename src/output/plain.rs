//! Plain text output formatting.
//!
//! Each result is printed on its own line as soon as it arrives. Colors are
//! only applied when requested, so piped output stays byte-for-byte stable.

use super::{format_seconds, Reporter};
use crate::error::CliResult;
use crate::prober::{CheckResult, ProbeReport, Summary};
use console::style;
use std::io::Write;

const TITLE: &str = "Service Availability Check Results:";
const SEPARATOR: &str = "==================================";

/// Human-readable line reporter.
pub struct PlainReporter<W: Write> {
    out: W,
    color: bool,
    banner: bool,
}

impl<W: Write> PlainReporter<W> {
    pub fn new(out: W, color: bool, banner: bool) -> Self {
        Self { out, color, banner }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Format one result line, without colors.
pub fn format_result(result: &CheckResult) -> String {
    render_result(result, false)
}

fn render_result(result: &CheckResult, color: bool) -> String {
    let secs = format_seconds(result.duration);
    if result.available {
        format!(
            "✅ {} - {} ({} seconds)",
            result.address,
            paint("Available", true, color),
            secs
        )
    } else {
        format!(
            "❌ {} - {}: {} ({} seconds)",
            result.address,
            paint("Unavailable", false, color),
            result.error_message(),
            secs
        )
    }
}

fn paint(text: &str, ok: bool, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let styled = style(text).force_styling(true).bold();
    if ok {
        styled.green().to_string()
    } else {
        styled.red().to_string()
    }
}

/// Format the closing summary line.
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "Summary: {} services checked, {} unavailable",
        summary.total_checked, summary.unavailable
    )
}

impl<W: Write> Reporter for PlainReporter<W> {
    fn begin(&mut self, _expected: usize) -> CliResult<()> {
        if self.banner {
            writeln!(self.out, "{}", TITLE)?;
            writeln!(self.out, "{}", SEPARATOR)?;
        }
        Ok(())
    }

    fn on_result(&mut self, result: &CheckResult) -> CliResult<()> {
        writeln!(self.out, "{}", render_result(result, self.color))?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, report: &ProbeReport) -> CliResult<()> {
        if self.banner {
            writeln!(self.out, "{}", SEPARATOR)?;
        }
        writeln!(self.out, "{}", format_summary(&report.summary))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}
