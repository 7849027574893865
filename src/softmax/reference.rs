//! softmax::reference — vectorized activation for cross-checking.
//!
//! Purpose
//! -------
//! Provide a second, independent softmax implementation in the style of a
//! deep-learning framework's built-in activation: vectorized over `ndarray`
//! and always max-shifted. The manual transform in `softmax::transform` and
//! this activation must agree within 1e-5 absolute, elementwise; the demo
//! binary and the integration tests exercise exactly that comparison.
//!
//! Key behaviors
//! -------------
//! - Expose [`activation`], operating on an `ArrayView1<f64>` and returning
//!   an `Array1<f64>` on the probability simplex.
//! - Share the input guards and error surface of the manual path, so both
//!   implementations reject the same malformed inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The activation is unconditionally max-shifted, matching the semantics
//!   of framework activations, which never overflow on finite input. There
//!   is no `Direct` mode here; the literal formulation belongs to the
//!   manual path.
//! - Output length equals input length; entries lie in (0, 1] and sum to 1
//!   up to rounding.
//!
//! Conventions
//! -----------
//! - All routines operate on `ndarray` types and favor whole-array
//!   operations (`fold`, `mapv`) over explicit index loops, which is what
//!   makes the implementation independent of the manual one.
//!
//! Downstream usage
//! ----------------
//! - The demo binary applies [`activation`] to the same logits it feeds the
//!   manual transform and plots one result against the other.
//! - Integration tests assert elementwise agreement of the two paths.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the simplex invariants, the canonical [1, 2, 3]
//!   scenario, and rejection of malformed input.

use ndarray::{Array1, ArrayView1};

use crate::softmax::errors::SoftmaxResult;
use crate::softmax::validation::validate_input;

/// Apply the softmax activation to a 1-D array.
///
/// Parameters
/// ----------
/// - `z`: `ArrayView1<f64>`
///   Input logits, length ≥ 1, elementwise finite.
///
/// Returns
/// -------
/// `SoftmaxResult<Array1<f64>>`
///   The probability vector σ with σ[i] = exp(z[i] − max z) / Σⱼ exp(z[j] −
///   max z), mathematically equal to the unshifted softmax.
///
/// Errors
/// ------
/// - `SoftmaxError::EmptyInput` when `z` is empty.
/// - `SoftmaxError::NonFiniteInput` when any element is NaN or ±∞.
///
/// Panics
/// ------
/// - Never panics under normal operation. The validation path requires a
///   contiguous view, which `ArrayView1` obtained from an owned `Array1`
///   always provides.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use rust_softmax::softmax::reference::activation;
///
/// let z = array![1.0, 2.0, 3.0];
/// let sigma = activation(z.view()).unwrap();
///
/// assert!((sigma.sum() - 1.0).abs() < 1e-12);
/// ```
pub fn activation(z: ArrayView1<f64>) -> SoftmaxResult<Array1<f64>> {
    match z.as_slice() {
        Some(slice) => validate_input(slice)?,
        None => {
            let owned: Vec<f64> = z.iter().copied().collect();
            validate_input(&owned)?;
        }
    }

    let max_z = z.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let exps = z.mapv(|v| (v - max_z).exp());
    let den = exps.sum();
    Ok(exps / den)
}
