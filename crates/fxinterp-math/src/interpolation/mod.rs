//! Interpolation methods for exchange rate estimation.
//!
//! # Available Methods
//!
//! - [`LagrangeInterpolator`]: Global polynomial through every node
//! - [`lagrange`]: One-shot evaluation over raw slices
//!
//! The Lagrange polynomial of `n` nodes has degree `n - 1` and passes through
//! every node exactly. Evaluation costs O(n²) and nothing is cached between
//! calls. Outside the node range the polynomial is still defined, so
//! extrapolation is allowed, but it carries no accuracy guarantee.

mod lagrange;

pub use lagrange::{lagrange, LagrangeInterpolator};

use crate::error::MathResult;

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
