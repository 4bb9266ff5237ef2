use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use probe_core::UreqTransport;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use config::Cli;

mod config;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::ERROR
    };
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|e| anyhow!(e))?;

    let probe = cli.probe();
    debug!(url = probe.url(), timeout = ?cli.timeout(), "starting login probe");

    let transport = UreqTransport::new(cli.timeout());
    let outcome = probe
        .run(&transport, &mut io::stdout().lock())
        .context("failed to write report")?;

    // Any HTTP answer counts as a completed probe, whatever its status.
    if outcome.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
