//! User-facing settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use fxinterp_core::{Date, EpochConvention};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Fewest decimal places shown for an estimated rate.
pub const MIN_PRECISION: u32 = 2;

/// Most decimal places shown for an estimated rate.
pub const MAX_PRECISION: u32 = 10;

/// Default output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
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

impl DisplayFormat {
    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "minimal" => Ok(Self::Minimal),
            _ => Err(ConfigError::validation(
                "format",
                format!("Invalid format: {s}. Use table, json, csv, or minimal."),
            )),
        }
    }
}

/// Persisted settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpConfig {
    /// Output format used when none is given on the command line.
    pub format: DisplayFormat,
    /// Decimal places for estimated rates.
    pub precision: u32,
    /// Epoch convention for new engines.
    pub epoch: EpochConvention,
    /// Whether status lines are colored.
    pub use_colors: bool,
}

impl Default for InterpConfig {
    fn default() -> Self {
        Self {
            format: DisplayFormat::Table,
            precision: 4,
            epoch: EpochConvention::ProlepticOrdinal,
            use_colors: true,
        }
    }
}

impl InterpConfig {
    /// Returns a setting as text.
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Format => self.format.to_string(),
            ConfigKey::Precision => self.precision.to_string(),
            ConfigKey::Epoch => epoch_to_text(&self.epoch),
            ConfigKey::UseColors => self.use_colors.to_string(),
        }
    }

    /// Parses and stores a setting. On error the config is unchanged.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> ConfigResult<()> {
        let mut updated = self.clone();
        match key {
            ConfigKey::Format => updated.format = value.parse()?,
            ConfigKey::Precision => {
                updated.precision = value.trim().parse().map_err(|_| {
                    ConfigError::validation(
                        "precision",
                        format!("Invalid precision: {value}. Must be a number."),
                    )
                })?;
            }
            ConfigKey::Epoch => updated.epoch = epoch_from_text(value)?,
            ConfigKey::UseColors => updated.use_colors = parse_bool(value)?,
        }
        updated.validate_or_error()?;
        *self = updated;
        Ok(())
    }

    /// Restores one setting to its default.
    pub fn reset(&mut self, key: ConfigKey) {
        let defaults = Self::default();
        match key {
            ConfigKey::Format => self.format = defaults.format,
            ConfigKey::Precision => self.precision = defaults.precision,
            ConfigKey::Epoch => self.epoch = defaults.epoch,
            ConfigKey::UseColors => self.use_colors = defaults.use_colors,
        }
    }

    /// Formats a rate with the configured number of decimals.
    pub fn format_rate(&self, rate: f64) -> String {
        format!("{:.prec$}", rate, prec = self.precision as usize)
    }
}

impl Validate for InterpConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            errors.push(ValidationError::with_rule(
                "precision",
                format!(
                    "Precision {} must be between {} and {}",
                    self.precision, MIN_PRECISION, MAX_PRECISION
                ),
                "precision_range",
            ));
        }

        errors
    }
}

/// Settable configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    Format,
    /// Decimal places for estimated rates
    Precision,
    /// Epoch convention
    Epoch,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    /// Canonical key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Precision => "precision",
            Self::Epoch => "epoch",
            Self::UseColors => "use_colors",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Format => "Default output format (table, json, csv, minimal)",
            Self::Precision => "Decimal places for estimated rates (2-10)",
            Self::Epoch => "Day axis epoch (ordinal, reference, reference:YYYY-MM-DD)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    /// Default value as text.
    pub fn default_value(&self) -> String {
        InterpConfig::default().get(*self)
    }

    /// All keys in display order.
    pub fn all() -> &'static [Self] {
        &[Self::Format, Self::Precision, Self::Epoch, Self::UseColors]
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "format" | "default_format" => Ok(Self::Format),
            "precision" | "decimal_precision" => Ok(Self::Precision),
            "epoch" => Ok(Self::Epoch),
            "use_colors" | "colors" => Ok(Self::UseColors),
            _ => Err(ConfigError::UnknownKey { key: s.to_string() }),
        }
    }
}

fn epoch_to_text(epoch: &EpochConvention) -> String {
    match epoch {
        EpochConvention::ProlepticOrdinal => "ordinal".to_string(),
        EpochConvention::Reference(date) => format!("reference:{date}"),
    }
}

fn epoch_from_text(value: &str) -> ConfigResult<EpochConvention> {
    let value = value.trim();
    match value.split_once(':') {
        None if value.eq_ignore_ascii_case("ordinal") => Ok(EpochConvention::ProlepticOrdinal),
        None if value.eq_ignore_ascii_case("reference") => Ok(EpochConvention::default_reference()),
        Some((kind, date)) if kind.eq_ignore_ascii_case("reference") => Date::parse(date)
            .map(EpochConvention::Reference)
            .map_err(|e| ConfigError::validation("epoch", e.to_string())),
        _ => Err(ConfigError::validation(
            "epoch",
            format!("Invalid epoch: {value}. Use ordinal, reference, or reference:YYYY-MM-DD."),
        )),
    }
}

fn parse_bool(value: &str) -> ConfigResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::validation(
            "use_colors",
            format!("Invalid boolean: {value}. Use true or false."),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InterpConfig::default();
        assert_eq!(config.format, DisplayFormat::Table);
        assert_eq!(config.precision, 4);
        assert_eq!(config.epoch, EpochConvention::ProlepticOrdinal);
        assert!(config.is_valid());
    }

    #[test]
    fn test_set_and_get() {
        let mut config = InterpConfig::default();

        config.set(ConfigKey::Format, "JSON").unwrap();
        config.set(ConfigKey::Precision, "2").unwrap();
        config.set(ConfigKey::Epoch, "reference").unwrap();
        config.set(ConfigKey::UseColors, "no").unwrap();

        assert_eq!(config.get(ConfigKey::Format), "json");
        assert_eq!(config.get(ConfigKey::Precision), "2");
        assert_eq!(config.get(ConfigKey::Epoch), "reference:2002-01-01");
        assert_eq!(config.get(ConfigKey::UseColors), "false");
    }

    #[test]
    fn test_invalid_values_leave_config_unchanged() {
        let mut config = InterpConfig::default();

        assert!(config.set(ConfigKey::Precision, "11").is_err());
        assert!(config.set(ConfigKey::Precision, "1").is_err());
        assert!(config.set(ConfigKey::Precision, "four").is_err());
        assert!(config.set(ConfigKey::Format, "xml").is_err());
        assert!(config.set(ConfigKey::Epoch, "reference:2002-13-01").is_err());
        assert!(config.set(ConfigKey::Epoch, "unix").is_err());
        assert!(config.set(ConfigKey::UseColors, "maybe").is_err());

        assert_eq!(config, InterpConfig::default());
    }

    #[test]
    fn test_custom_reference_epoch() {
        let mut config = InterpConfig::default();
        config.set(ConfigKey::Epoch, "reference:1999-12-31").unwrap();
        assert_eq!(
            config.epoch,
            EpochConvention::Reference(Date::from_ymd(1999, 12, 31).unwrap())
        );
    }

    #[test]
    fn test_reset_key() {
        let mut config = InterpConfig::default();
        config.set(ConfigKey::Precision, "8").unwrap();
        config.reset(ConfigKey::Precision);
        assert_eq!(config.precision, 4);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("precision".parse::<ConfigKey>().unwrap(), ConfigKey::Precision);
        assert_eq!("colors".parse::<ConfigKey>().unwrap(), ConfigKey::UseColors);
        assert!(matches!(
            "daycount".parse::<ConfigKey>(),
            Err(ConfigError::UnknownKey { .. })
        ));
        assert_eq!(ConfigKey::all().len(), 4);
        assert_eq!(ConfigKey::Precision.default_value(), "4");
    }

    #[test]
    fn test_format_rate() {
        let mut config = InterpConfig::default();
        assert_eq!(config.format_rate(26.432_725_806), "26.4327");
        config.precision = 2;
        assert_eq!(config.format_rate(26.432_725_806), "26.43");
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = InterpConfig::default();
        config.set(ConfigKey::Epoch, "reference:2002-01-01").unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let back: InterpConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        // Missing fields fall back to defaults
        let partial: InterpConfig = serde_json::from_str(r#"{"precision": 6}"#).unwrap();
        assert_eq!(partial.precision, 6);
        assert_eq!(partial.format, DisplayFormat::Table);
    }
}
