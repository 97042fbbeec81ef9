#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::Parser;
use es_index_stats::config::{Cli, ShimConfig};
use es_index_stats::logging::{init_logging, render_error};
use es_index_stats::scrape::{local_hostname, run};
use std::process::ExitCode;
use tracing::Level;
use tracing::event;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // No subscriber yet, report on stderr
    let config = match setup(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", render_error(&err));
            return ExitCode::FAILURE;
        }
    };

    match execute(&config) {
        Ok(lines) => {
            event!(Level::DEBUG, lines, "Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            event!(Level::ERROR, "{}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn setup(cli: Cli) -> Result<ShimConfig> {
    let config = ShimConfig::load(cli).context("Failed to load configuration")?;
    init_logging(&config)?;
    Ok(config)
}

fn execute(config: &ShimConfig) -> Result<usize> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(async_main(config))
}

async fn async_main(config: &ShimConfig) -> Result<usize> {
    let hostname = local_hostname()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run(config, &hostname, &mut out).await
}
