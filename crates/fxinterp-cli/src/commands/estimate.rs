//! Estimate command implementation.
//!
//! Builds an engine from the given samples and estimates the rate on each
//! target date.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use fxinterp_core::Date;

use super::{validate_precision, Context, SampleSource};
use crate::cli::OutputFormat;
use crate::output::{format_change, print_header, print_output, print_warning, MinimalValue};

/// Arguments for the estimate command.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub source: SampleSource,

    /// Decimal places in the output [default: from config]
    #[arg(short, long)]
    pub precision: Option<u32>,

    /// Dates to estimate (YYYY-MM-DD)
    #[arg(required = true, value_name = "TARGET")]
    pub targets: Vec<String>,
}

/// One estimated rate.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct EstimateRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Rate")]
    pub rate: String,
    #[tabled(rename = "Change/Day")]
    pub daily_change: String,
    #[tabled(rename = "Outside Samples")]
    pub extrapolated: bool,
}

impl MinimalValue for EstimateRow {
    fn minimal(&self) -> String {
        self.rate.clone()
    }
}

/// Execute the estimate command.
pub fn execute(args: EstimateArgs, ctx: &Context) -> Result<()> {
    let settings = ctx.settings();
    let precision = validate_precision(args.precision.unwrap_or(settings.precision))?;
    let engine = args.source.build_engine(settings)?;

    let mut rows = Vec::with_capacity(args.targets.len());
    for target in &args.targets {
        let date = Date::parse(target)?;
        let rate = engine.evaluate_date(date)?;
        let change = engine.daily_change_date(date)?;

        rows.push(EstimateRow {
            date: date.to_string(),
            rate: format!("{:.prec$}", rate, prec = precision as usize),
            daily_change: format_change(change, precision),
            extrapolated: !engine.covers(&date),
        });
    }

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header(&format!(
            "Estimated rates ({} samples, {} epoch)",
            engine.len(),
            engine.axis().convention()
        ));
    }

    print_output(&rows, ctx.format)?;

    if !ctx.quiet && rows.iter().any(|r| r.extrapolated) {
        print_warning("Some targets lie outside the sample range; estimates are extrapolated");
    }

    Ok(())
}
