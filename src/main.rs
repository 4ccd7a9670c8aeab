use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use svcprobe::cli::{usage, Cli};
use svcprobe::config::AppSettings;
use svcprobe::output::print_error;
use svcprobe::CliError;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool, quiet: bool) {
    let default = if verbose {
        "svcprobe=debug"
    } else if quiet {
        "svcprobe=error"
    } else {
        "svcprobe=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = AppSettings::resolve(cli.config.as_deref()).context("failed to load settings")?;
    init_logging(cli.verbose || settings.verbose, cli.quiet);

    let report = cli.execute(&settings).await?;
    Ok(report.exit_code())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            if let Some(CliError::NoServices) = e.downcast_ref::<CliError>() {
                print_error(&e.to_string());
                eprintln!("{}", usage());
            } else {
                print_error(&format!("{:#}", e));
            }
            ExitCode::FAILURE
        }
    }
}
