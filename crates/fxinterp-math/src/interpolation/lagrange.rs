//! Lagrange polynomial interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Minimum number of nodes for a well-posed interpolation.
pub const MIN_NODES: usize = 2;

/// Evaluates the Lagrange polynomial through `(xs[i], ys[i])` at `x`.
///
/// Nodes may be given in any order. They are validated on every call; use
/// [`LagrangeInterpolator`] to validate once and evaluate many times.
///
/// # Errors
///
/// - `InvalidInput` if the slices differ in length or contain non-finite values
/// - `InsufficientData` if fewer than two nodes are given
/// - `DuplicateNode` if two nodes share an x value
///
/// # Example
///
/// ```rust
/// use fxinterp_math::interpolation::lagrange;
///
/// let y = lagrange(&[0.0, 31.0], &[26.5850, 26.2703], 15.0).unwrap();
/// assert!((y - 26.43272).abs() < 1e-4);
/// ```
pub fn lagrange(xs: &[f64], ys: &[f64], x: f64) -> MathResult<f64> {
    validate_nodes(xs, ys)?;
    Ok(evaluate(xs, ys, x))
}

/// Lagrange interpolating polynomial over a fixed node set.
///
/// # Example
///
/// ```rust
/// use fxinterp_math::interpolation::{Interpolator, LagrangeInterpolator};
///
/// // y = x² through three nodes
/// let interp = LagrangeInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 2.25).abs() < 1e-12);
/// assert!((interp.derivative(1.5).unwrap() - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LagrangeInterpolator {
    /// Creates a new interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 nodes, lengths differ,
    /// a value is not finite, or two nodes share an x value.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys)?;
        Ok(Self { xs, ys })
    }

    /// Creates an interpolator from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same conditions as [`LagrangeInterpolator::new`].
    pub fn from_points(points: &[(f64, f64)]) -> MathResult<Self> {
        let (xs, ys) = points.iter().copied().unzip();
        Self::new(xs, ys)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True when there are no nodes. Construction requires two, so this is false
    /// for every successfully built interpolator.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Degree of the interpolating polynomial.
    pub fn degree(&self) -> usize {
        self.xs.len() - 1
    }
}

impl Interpolator for LagrangeInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        Ok(evaluate(&self.xs, &self.ys, x))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        Ok(evaluate_derivative(&self.xs, &self.ys, x))
    }

    fn allows_extrapolation(&self) -> bool {
        true
    }

    fn min_x(&self) -> f64 {
        self.xs.iter().copied().fold(f64::INFINITY, f64::min)
    }

    fn max_x(&self) -> f64 {
        self.xs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

fn validate_nodes(xs: &[f64], ys: &[f64]) -> MathResult<()> {
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < MIN_NODES {
        return Err(MathError::insufficient_data(MIN_NODES, xs.len()));
    }
    if let Some(i) = xs.iter().position(|x| !x.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "x value at position {i} is not finite"
        )));
    }
    if let Some(i) = ys.iter().position(|y| !y.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "y value at position {i} is not finite"
        )));
    }

    for i in 0..xs.len() {
        for j in (i + 1)..xs.len() {
            if xs[i] == xs[j] {
                return Err(MathError::duplicate_node(xs[i], i, j));
            }
        }
    }

    Ok(())
}

/// Classical Lagrange form. Nodes must already be validated.
fn evaluate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let mut result = 0.0;

    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut term = yi;
        for (j, &xj) in xs.iter().enumerate() {
            if i != j {
                term *= (x - xj) / (xi - xj);
            }
        }
        result += term;

        log::trace!(
            "lagrange term {}: node ({}, {}) at x = {} contributes {} (sum {})",
            i,
            xi,
            yi,
            x,
            term,
            result
        );
    }

    result
}

/// Derivative of the classical form, expanding each basis product with the
/// product rule. O(n³); nodes must already be validated.
fn evaluate_derivative(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let mut result = 0.0;

    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut basis_slope = 0.0;
        for (k, &xk) in xs.iter().enumerate() {
            if k == i {
                continue;
            }
            let mut factor = 1.0 / (xi - xk);
            for (j, &xj) in xs.iter().enumerate() {
                if j != i && j != k {
                    factor *= (x - xj) / (xi - xj);
                }
            }
            basis_slope += factor;
        }
        result += yi * basis_slope;
    }

    result
}
