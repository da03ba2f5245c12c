//! qpay - CLI tool for the QPay V2 merchant API.
//!
//! A thin wrapper over the `qpay` library for manual exploration of the API.
//! Configuration is read from the `QPAY_*` environment variables.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{ebarimt, invoice, payment, token};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Token(args) => token::run(args).await,
        Commands::Refresh(args) => token::run_refresh(args).await,
        Commands::Invoice(cmd) => invoice::handle(cmd).await,
        Commands::Payment(cmd) => payment::handle(cmd).await,
        Commands::Ebarimt(cmd) => ebarimt::handle(cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so stdout stays machine-readable
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
