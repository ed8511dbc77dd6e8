//! Error types for the fxinterp library.
//!
//! Every failure the interpolation engine can report to its caller is a
//! variant of [`FxError`]. All of them are recoverable: the engine is left in
//! the state it had before the failing call.

use thiserror::Error;

/// A specialized Result type for fxinterp operations.
pub type FxResult<T> = Result<T, FxError>;

/// The main error type for fxinterp operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    /// Input is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}': {reason}. Use YYYY-MM-DD.")]
    DateFormat {
        /// The rejected input text.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// Rate is not a finite real number.
    #[error("Invalid rate '{input}': {reason}")]
    InvalidRate {
        /// The rejected rate, as text.
        input: String,
        /// Why the rate was rejected.
        reason: String,
    },

    /// A sample already exists on the same day.
    #[error("Duplicate sample: a rate for {date} (axis {ordinal}) is already present")]
    DuplicateSample {
        /// The colliding date.
        date: String,
        /// The colliding axis ordinal.
        ordinal: i64,
    },

    /// Too few samples to interpolate.
    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData {
        /// Minimum required samples.
        required: usize,
        /// Samples currently held.
        actual: usize,
    },

    /// Numerical failure reported by the evaluator.
    #[error("Numerical error: {reason}")]
    Numerical {
        /// Description of the failure.
        reason: String,
    },

    /// I/O failure while reading sample data.
    #[error("IO error: {reason}")]
    Io {
        /// Description of the failure.
        reason: String,
    },

    /// Malformed sample record.
    #[error("Parse error: {reason}")]
    Parse {
        /// Description of the failure.
        reason: String,
    },
}

impl FxError {
    /// Creates a date format error.
    #[must_use]
    pub fn date_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DateFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate sample error.
    #[must_use]
    pub fn duplicate_sample(date: impl Into<String>, ordinal: i64) -> Self {
        Self::DuplicateSample {
            date: date.into(),
            ordinal,
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates a numerical error.
    #[must_use]
    pub fn numerical(reason: impl Into<String>) -> Self {
        Self::Numerical {
            reason: reason.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FxError::date_format("2002-13-01", "input is out of range");
        assert!(err.to_string().contains("Invalid date '2002-13-01'"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = FxError::insufficient_data(2, 1);
        assert!(err.to_string().contains("at least 2"));
        assert!(err.to_string().contains("got 1"));
    }
}
