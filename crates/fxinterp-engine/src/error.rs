//! Mapping from evaluator failures to the engine's error taxonomy.

use fxinterp_core::FxError;
use fxinterp_math::MathError;

/// Converts a [`MathError`] into the matching [`FxError`].
///
/// The engine validates samples before they reach the evaluator, so only
/// `InsufficientData` is expected in practice; the other variants are mapped
/// rather than unwrapped.
pub fn from_math_error(err: MathError) -> FxError {
    match err {
        MathError::InsufficientData { required, actual } => {
            FxError::insufficient_data(required, actual)
        }
        MathError::DuplicateNode { x, first, second } => FxError::numerical(format!(
            "duplicate axis value {x} at samples {first} and {second}"
        )),
        MathError::InvalidInput { reason } => FxError::numerical(reason),
    }
}
