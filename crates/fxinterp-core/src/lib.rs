//! # fxinterp Core
//!
//! Core types and abstractions for the fxinterp exchange rate interpolation library.
//!
//! This crate provides the foundational building blocks used throughout fxinterp:
//!
//! - **Types**: `Date`, a thin newtype over `chrono::NaiveDate`
//! - **Date Axis**: Conversion of calendar dates to integer day ordinals under a
//!   fixed [`EpochConvention`]
//! - **Errors**: The [`FxError`] taxonomy shared by the engine and its callers
//!
//! ## Example
//!
//! ```rust
//! use fxinterp_core::prelude::*;
//!
//! let axis = DateAxis::new(EpochConvention::default_reference());
//! assert_eq!(axis.parse("2002-01-16").unwrap(), 15);
//! assert!(axis.parse("2002-13-01").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FxError, FxResult};
    pub use crate::types::{Date, DateAxis, EpochConvention};
}

// Re-export commonly used types at crate root
pub use error::{FxError, FxResult};
pub use types::{Date, DateAxis, EpochConvention};
