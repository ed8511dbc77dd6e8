//! # fxinterp Engine
//!
//! Estimates an exchange rate for an arbitrary date from a small set of known
//! `(date, rate)` samples, using Lagrange polynomial interpolation over
//! day-ordinal axis values.
//!
//! ## Architecture
//!
//! ```text
//!   "2002-01-16" ─▶ DateAxis ─▶ ordinal ─▶ InterpolationEngine ─▶ 26.43272
//!                                               │         ▲
//!                                        xs, ys ▼         │ value
//!                                           LagrangeInterpolator
//! ```
//!
//! The engine is a plain value owned by its caller. It never removes samples,
//! never caches results, and never performs I/O; the [`loader`] module reads
//! sample files for callers that want them.
//!
//! ## Example
//!
//! ```rust
//! use fxinterp_engine::InterpolationEngine;
//!
//! let mut engine = InterpolationEngine::new();
//! engine.add_sample("2002-01-01", 26.5850).unwrap();
//! engine.add_sample("2002-02-01", 26.2703).unwrap();
//!
//! let rate = engine.evaluate("2002-01-16").unwrap();
//! assert!((rate - 26.43272).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod dataset;
mod engine;
mod error;
pub mod loader;
mod sample;

pub use engine::{InterpolationEngine, MIN_SAMPLES};
pub use error::from_math_error;
pub use sample::{parse_rate, Sample, SampleRecord};

pub use fxinterp_core::{Date, DateAxis, EpochConvention, FxError, FxResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::InterpolationEngine;
    pub use crate::sample::{Sample, SampleRecord};
    pub use fxinterp_core::prelude::*;
}
