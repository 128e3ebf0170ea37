//! cfspline CLI - natural cubic spline interpolation from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Interpolate a series
//! cfspline interp1d --samples series.csv --at 0.5,1.25,3
//!
//! # Slope instead of value
//! cfspline interp1d --samples series.csv --at 0.5 --derivative
//!
//! # Sample a gridded field
//! cfspline interp2d --grid thickness.csv --at 1000:2500,1200:2600
//!
//! # Extract a profile along a flowline
//! cfspline profile --grid thickness.csv --vertices 0:0,5000:2000 --interval 250
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod commands;
mod config;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::CliConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, source) = CliConfig::load(cli.config.as_deref())?;
    init_tracing(&config.log_filter);
    tracing::debug!(?source, "configuration loaded");

    let ctx = Context::new(&cli, config, source);

    match cli.command {
        Commands::Interp1d(args) => commands::interp1d::execute(args, &ctx)?,
        Commands::Interp2d(args) => commands::interp2d::execute(args, &ctx)?,
        Commands::Profile(args) => commands::profile::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the configured filter.
fn init_tracing(fallback: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
