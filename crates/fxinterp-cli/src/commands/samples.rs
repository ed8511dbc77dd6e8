//! Samples command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use super::{Context, SampleSource};
use crate::cli::OutputFormat;
use crate::output::{print_header, print_output, MinimalValue};

/// Arguments for the samples command.
#[derive(Args, Debug)]
pub struct SamplesArgs {
    #[command(flatten)]
    pub source: SampleSource,
}

/// One sample as held by the engine.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SampleRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Day")]
    pub ordinal: i64,
    #[tabled(rename = "Rate")]
    pub rate: f64,
}

impl MinimalValue for SampleRow {
    fn minimal(&self) -> String {
        format!("{}={}", self.date, self.rate)
    }
}

/// Execute the samples command.
pub fn execute(args: SamplesArgs, ctx: &Context) -> Result<()> {
    let engine = args.source.build_engine(ctx.settings())?;

    let rows: Vec<SampleRow> = engine
        .samples()
        .iter()
        .map(|s| SampleRow {
            date: s.date().to_string(),
            ordinal: s.ordinal(),
            rate: s.rate(),
        })
        .collect();

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        let title = match engine.date_range() {
            Some((first, last)) => format!("Samples {first} to {last}"),
            None => "Samples".to_string(),
        };
        print_header(&format!("{title} ({} epoch)", engine.axis().convention()));
    }

    print_output(&rows, ctx.format)
}
