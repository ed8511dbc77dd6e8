//! fxinterp CLI - Estimate exchange rates between known samples.
//!
//! # Usage
//!
//! ```bash
//! # Estimate a mid-month rate from two month-start samples
//! fxinterp estimate -s 2002-01-01=26.5850 -s 2002-02-01=26.2703 2002-01-16
//!
//! # Use the bundled USD/PHP series
//! fxinterp estimate --builtin 2002-06-15 2003-02-14
//!
//! # Load samples from a CSV file with a `date,rate` header
//! fxinterp --format json estimate --file rates.csv 2002-03-10
//!
//! # Inspect samples as placed on the day axis
//! fxinterp samples --builtin --epoch reference
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let ctx = Context::from_cli(&cli)?;
    debug!(format = ?ctx.format, config = %ctx.store.path().display(), "starting");

    match cli.command {
        Commands::Estimate(args) => commands::estimate::execute(args, &ctx)?,
        Commands::Samples(args) => commands::samples::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
