//! Exchange rate samples.

use serde::{Deserialize, Serialize};

use fxinterp_core::{Date, FxError, FxResult};

/// A known rate on a known day.
///
/// `ordinal` is the day's position on the owning engine's
/// [`DateAxis`](fxinterp_core::DateAxis), fixed when the sample is added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    date: Date,
    ordinal: i64,
    rate: f64,
}

impl Sample {
    pub(crate) fn new(date: Date, ordinal: i64, rate: f64) -> Self {
        Self {
            date,
            ordinal,
            rate,
        }
    }

    /// Calendar date of the sample.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Axis ordinal of the sample's date.
    pub fn ordinal(&self) -> i64 {
        self.ordinal
    }

    /// Known rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// A raw `date,rate` record as read from text input.
///
/// Both fields stay textual so that parse failures surface as
/// [`FxError::DateFormat`] and [`FxError::InvalidRate`] when the record is
/// added to an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Date text, expected as `YYYY-MM-DD`.
    pub date: String,
    /// Rate text.
    pub rate: String,
}

impl SampleRecord {
    /// Creates a record.
    pub fn new(date: impl Into<String>, rate: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            rate: rate.into(),
        }
    }

    /// Parses `DATE=RATE`, the form used on the command line.
    pub fn parse_pair(s: &str) -> FxResult<Self> {
        match s.split_once('=') {
            Some((date, rate)) => Ok(Self::new(date.trim(), rate.trim())),
            None => Err(FxError::parse(format!("expected DATE=RATE, got '{s}'"))),
        }
    }
}

/// Parses rate text into a finite `f64`.
///
/// # Errors
///
/// Returns `FxError::InvalidRate` for non-numeric text and for `NaN` or
/// infinite values.
pub fn parse_rate(s: &str) -> FxResult<f64> {
    let rate: f64 = s
        .trim()
        .parse()
        .map_err(|_| FxError::invalid_rate(s, "not a number"))?;
    validate_rate(rate).map_err(|_| FxError::invalid_rate(s, "rate must be finite"))
}

/// Rejects non-finite rates.
pub(crate) fn validate_rate(rate: f64) -> FxResult<f64> {
    if rate.is_finite() {
        Ok(rate)
    } else {
        Err(FxError::invalid_rate(rate.to_string(), "rate must be finite"))
    }
}
