//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Display precision out of range.
    #[error("Invalid precision: {value}. Must be between {min} and {max}.")]
    InvalidPrecision {
        /// Requested precision.
        value: u32,
        /// Smallest allowed.
        min: u32,
        /// Largest allowed.
        max: u32,
    },

    /// `--reference-date` given together with `--epoch ordinal`.
    #[error("--reference-date only applies to the reference epoch")]
    ReferenceDateWithOrdinal,
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
