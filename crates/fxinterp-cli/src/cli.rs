//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use fxinterp_config::DisplayFormat;

use crate::commands::{ConfigArgs, EstimateArgs, SamplesArgs};

/// fxinterp - Exchange rate estimation by Lagrange interpolation
#[derive(Parser)]
#[command(name = "fxinterp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: from config, else table]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "FXINTERP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Estimate rates on target dates from known samples
    Estimate(EstimateArgs),

    /// List samples as placed on the day axis
    Samples(SamplesArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

impl From<DisplayFormat> for OutputFormat {
    fn from(format: DisplayFormat) -> Self {
        match format {
            DisplayFormat::Table => Self::Table,
            DisplayFormat::Json => Self::Json,
            DisplayFormat::Csv => Self::Csv,
            DisplayFormat::Minimal => Self::Minimal,
        }
    }
}

/// Epoch convention options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EpochArg {
    /// Days since 0001-01-01 (proleptic Gregorian)
    Ordinal,
    /// Days since a reference date
    Reference,
}
