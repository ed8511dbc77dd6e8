//! CLI command implementations.

pub mod config;
pub mod estimate;
pub mod samples;

pub use config::ConfigArgs;
pub use estimate::EstimateArgs;
pub use samples::SamplesArgs;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use tracing::{debug, info};

use fxinterp_config::{ConfigError, ConfigStore, InterpConfig};
use fxinterp_core::{Date, EpochConvention};
use fxinterp_engine::{dataset, loader, InterpolationEngine, SampleRecord};

use crate::cli::{Cli, EpochArg, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::print_warning;

/// Settings shared by every command.
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub store: ConfigStore,
    settings: InterpConfig,
    load_error: Option<ConfigError>,
}

impl Context {
    /// Resolves the config file and applies global flags.
    ///
    /// A config file that cannot be read does not fail here; see
    /// [`Context::settings`] and [`Context::saved_settings`].
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let store = match &cli.config {
            Some(path) => ConfigStore::at(path),
            None => ConfigStore::default_location()?,
        };
        let (settings, load_error) = match store.load() {
            Ok(settings) => (settings, None),
            Err(err) => {
                debug!(path = %store.path().display(), error = %err, "unreadable config file");
                (InterpConfig::default(), Some(err))
            }
        };

        if !settings.use_colors {
            colored::control::set_override(false);
        }

        Ok(Self {
            format: cli.format.unwrap_or_else(|| settings.format.into()),
            quiet: cli.quiet,
            store,
            settings,
            load_error,
        })
    }

    /// Settings for commands that can run on defaults.
    ///
    /// Prints a warning when the config file was unreadable.
    pub fn settings(&self) -> &InterpConfig {
        if let (Some(err), false) = (&self.load_error, self.quiet) {
            print_warning(&format!(
                "Ignoring config file {} ({err}); using defaults",
                self.store.path().display()
            ));
        }
        &self.settings
    }

    /// Settings as saved on disk, for commands that show or edit them.
    pub fn saved_settings(&self) -> Result<&InterpConfig> {
        match &self.load_error {
            None => Ok(&self.settings),
            Some(err) => Err(anyhow!(
                "Cannot read config file {}: {err}. Run `fxinterp config reset --all` to restore defaults.",
                self.store.path().display()
            )),
        }
    }
}

/// Where samples come from, and which day axis they are placed on.
#[derive(Args, Debug)]
pub struct SampleSource {
    /// Known sample, repeatable
    #[arg(short, long = "sample", value_name = "DATE=RATE")]
    pub samples: Vec<String>,

    /// CSV file with a `date,rate` header
    #[arg(long, value_name = "CSV")]
    pub file: Option<PathBuf>,

    /// Start from the bundled USD/PHP 2002-2003 month-start series
    #[arg(long)]
    pub builtin: bool,

    /// Day axis epoch [default: from config]
    #[arg(long, value_enum)]
    pub epoch: Option<EpochArg>,

    /// Reference date for the reference epoch
    #[arg(long, value_name = "DATE")]
    pub reference_date: Option<String>,
}

impl SampleSource {
    /// Epoch from flags, falling back to the configured one.
    pub fn convention(&self, settings: &InterpConfig) -> Result<EpochConvention> {
        let configured = settings.epoch;
        let convention = match (self.epoch, &self.reference_date) {
            (Some(EpochArg::Ordinal), Some(_)) => {
                return Err(CliError::ReferenceDateWithOrdinal.into())
            }
            (_, Some(date)) => EpochConvention::Reference(Date::parse(date)?),
            (Some(EpochArg::Ordinal), None) => EpochConvention::ProlepticOrdinal,
            (Some(EpochArg::Reference), None) => match configured {
                EpochConvention::Reference(_) => configured,
                EpochConvention::ProlepticOrdinal => EpochConvention::default_reference(),
            },
            (None, None) => configured,
        };
        Ok(convention)
    }

    /// Builds an engine from the builtin series, then the file, then `--sample` flags.
    pub fn build_engine(&self, settings: &InterpConfig) -> Result<InterpolationEngine> {
        let convention = self.convention(settings)?;

        let mut engine = if self.builtin {
            dataset::usd_php_2002_2003(convention)?
        } else {
            InterpolationEngine::with_epoch(convention)
        };

        if let Some(path) = &self.file {
            for record in loader::load_csv(path)? {
                engine.add_record(&record)?;
            }
        }

        for pair in &self.samples {
            engine.add_record(&SampleRecord::parse_pair(pair)?)?;
        }

        info!(samples = engine.len(), epoch = %convention, "engine ready");
        Ok(engine)
    }
}

/// Validates a display precision.
pub fn validate_precision(precision: u32) -> CliResult<u32> {
    use fxinterp_config::{MAX_PRECISION, MIN_PRECISION};

    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(CliError::InvalidPrecision {
            value: precision,
            min: MIN_PRECISION,
            max: MAX_PRECISION,
        });
    }
    Ok(precision)
}
