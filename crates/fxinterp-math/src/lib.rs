//! # fxinterp Math
//!
//! Numerical routines for the fxinterp exchange rate interpolation library.
//!
//! This crate provides:
//!
//! - **Interpolation**: The [`Interpolator`](interpolation::Interpolator) trait and
//!   Lagrange polynomial interpolation over arbitrary distinct nodes
//!
//! ## Design Philosophy
//!
//! - **Exact Algorithm**: The classical Lagrange form, evaluated term by term
//! - **Fail Cleanly**: Degenerate inputs are rejected before any arithmetic,
//!   never propagated as `NaN` or infinity
//! - **Observable**: Each term is emitted through the `log` facade at trace level

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{lagrange, Interpolator, LagrangeInterpolator};
}

pub use error::{MathError, MathResult};
