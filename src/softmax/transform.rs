//! softmax::transform — the softmax transform and its Jacobian.
//!
//! Purpose
//! -------
//! Implement the softmax transform σ[i] = exp(z[i]) / Σⱼ exp(z[j]) over a
//! 1-D sequence of finite reals, in two formulations: the literal one
//! (exponentiate, sum, normalize) and the max-shifted one (subtract max(z)
//! before exponentiating). Both produce the same mathematical result; only
//! the literal formulation can leave the representable `f64` range.
//!
//! Key behaviors
//! -------------
//! - Expose [`softmax`] (default formulation) and [`softmax_with`] (explicit
//!   [`Stability`] selection), both returning probability vectors with
//!   strictly positive entries summing to 1 up to rounding.
//! - Surface range failures of the literal formulation as structured errors
//!   ([`SoftmaxError::Overflow`], [`SoftmaxError::VanishingDenominator`])
//!   instead of silently producing `inf`/`NaN`.
//! - Provide the softmax Jacobian J[i][j] = σ[i]·(δᵢⱼ − σ[j]) via
//!   [`jacobian`] for gradient propagation and curvature checks.
//!
//! Invariants & assumptions
//! ------------------------
//! - All entry points validate their input through
//!   `softmax::validation::validate_input` (non-empty, elementwise finite)
//!   before computing exponentials.
//! - The output has the same length as the input, and the transform is
//!   equivariant under permutations: permuting the input permutes the output
//!   identically.
//! - The max-shifted formulation can neither overflow (shifted inputs are
//!   ≤ 0, so every exponential is ≤ 1) nor produce a zero denominator (the
//!   maximal element contributes exp(0) = 1).
//!
//! Conventions
//! -----------
//! - The manual path operates on `&[f64]` and allocates one `Vec<f64>` for
//!   the result; the vectorized counterpart over `ndarray` lives in
//!   `softmax::reference`.
//! - Error handling uses the dedicated [`SoftmaxError`] type and the result
//!   alias [`SoftmaxResult<T>`].
//! - This module never logs, performs I/O, or touches global state; it is a
//!   pure numerical kernel suitable for use inside tight inner loops.
//!
//! Downstream usage
//! ----------------
//! - Callers that mirror the pedagogical formula exactly (e.g. the demo
//!   binary) select [`Stability::Direct`]; production callers should prefer
//!   the default [`Stability::ShiftMax`].
//! - `softmax::reference::activation` provides an independent vectorized
//!   implementation for cross-checking; the two must agree within 1e-5
//!   absolute elementwise.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover the concrete scenarios ([1, 2, 3], uniform
//!   input, single element), the simplex invariants, monotonicity, shift
//!   invariance, permutation equivariance, the `Direct`-mode range errors,
//!   and the Jacobian entries.
//! - End-to-end agreement with the reference activation is exercised in the
//!   crate's integration tests.

use ndarray::Array2;

use crate::softmax::errors::{SoftmaxError, SoftmaxResult};
use crate::softmax::validation::validate_input;

/// Stability — formulation choice for the softmax transform.
///
/// Purpose
/// -------
/// Make the literal-vs-stabilized trade-off an explicit caller decision
/// rather than a hidden default. The two formulations agree exactly in
/// real arithmetic; in `f64` they diverge only on inputs whose
/// exponentials leave the representable range.
///
/// Variants
/// --------
/// - `Direct`
///   Exponentiate the inputs as written. Faithful to the textbook formula;
///   overflows for inputs around 709.8 and loses the denominator entirely
///   when every input is below about −745.
/// - `ShiftMax`
///   Subtract `max(z)` from every element before exponentiating. Shift
///   invariance of softmax makes the result identical; the shifted inputs
///   are ≤ 0, so no exponential can overflow and the denominator is ≥ 1.
///
/// Notes
/// -----
/// - `ShiftMax` is the [`Default`]; `Direct` exists for callers that want
///   the pedagogical formulation and explicit range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stability {
    Direct,
    #[default]
    ShiftMax,
}

/// Compute the softmax transform with the default (max-shifted) formulation.
///
/// Parameters
/// ----------
/// - `z`: `&[f64]`
///   Input sequence of finite logits, length ≥ 1.
///
/// Returns
/// -------
/// `SoftmaxResult<Vec<f64>>`
///   A vector of the same length as `z` with entries in (0, 1) summing to 1
///   up to floating-point rounding.
///
/// Errors
/// ------
/// - `SoftmaxError::EmptyInput` when `z` is empty.
/// - `SoftmaxError::NonFiniteInput` when any element is NaN or ±∞.
///
/// Panics
/// ------
/// - Never panics under normal operation; all user-facing invalid inputs
///   are surfaced as `SoftmaxError` values.
///
/// Examples
/// --------
/// ```rust
/// use rust_softmax::softmax::transform::softmax;
///
/// let sigma = softmax(&[1.0, 2.0, 3.0]).unwrap();
///
/// assert_eq!(sigma.len(), 3);
/// assert!((sigma.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// assert!((sigma[2] - 0.665_240_96).abs() < 1e-6);
/// ```
pub fn softmax(z: &[f64]) -> SoftmaxResult<Vec<f64>> {
    softmax_with(z, Stability::default())
}

/// Compute the softmax transform with an explicit formulation.
///
/// Parameters
/// ----------
/// - `z`: `&[f64]`
///   Input sequence of finite logits, length ≥ 1.
/// - `stability`: [`Stability`]
///   `Direct` for the literal formula, `ShiftMax` for the max-shifted one.
///
/// Returns
/// -------
/// `SoftmaxResult<Vec<f64>>`
///   The probability vector σ with σ[i] = exp(z[i]) / Σⱼ exp(z[j]).
///
/// Errors
/// ------
/// - `SoftmaxError::EmptyInput` / `SoftmaxError::NonFiniteInput`
///   From input validation, in either mode.
/// - `SoftmaxError::Overflow { index, value }`
///   `Direct` mode only: `exp(z[index])` or the accumulated denominator is
///   not representable. The reported index is the offending element (for a
///   denominator overflow, the position of the largest input).
/// - `SoftmaxError::VanishingDenominator`
///   `Direct` mode only: every exponential underflowed to zero.
///
/// Panics
/// ------
/// - Never panics under normal operation.
///
/// Notes
/// -----
/// - Bit-for-bit agreement between the two modes is not guaranteed even
///   where `Direct` succeeds; they agree within normal floating-point
///   tolerance (see the crate's integration tests).
pub fn softmax_with(z: &[f64], stability: Stability) -> SoftmaxResult<Vec<f64>> {
    validate_input(z)?;

    match stability {
        Stability::Direct => softmax_direct(z),
        Stability::ShiftMax => Ok(softmax_shift_max(z)),
    }
}

/// Compute the softmax Jacobian J[i][j] = σ[i]·(δᵢⱼ − σ[j]).
///
/// Parameters
/// ----------
/// - `z`: `&[f64]`
///   Input sequence of finite logits, length n ≥ 1.
///
/// Returns
/// -------
/// `SoftmaxResult<Array2<f64>>`
///   The n×n Jacobian of the transform at `z`: diagonal entries
///   σ[i]·(1 − σ[i]), off-diagonal entries −σ[i]·σ[j]. Each row sums to
///   zero up to rounding, reflecting the sum-to-one constraint.
///
/// Errors
/// ------
/// - Any error produced by [`softmax`] on `z` (the probabilities are
///   computed with the default max-shifted formulation).
///
/// Panics
/// ------
/// - Never panics under normal operation.
pub fn jacobian(z: &[f64]) -> SoftmaxResult<Array2<f64>> {
    let sigma = softmax(z)?;
    let n = sigma.len();

    let mut out = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            out[[i, j]] =
                if i == j { sigma[i] * (1.0 - sigma[i]) } else { -sigma[i] * sigma[j] };
        }
    }
    Ok(out)
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Literal formulation: exponentiate as written, then normalize.
///
/// Surfaces range failures instead of propagating `inf`/`NaN`:
/// - an infinite exponential reports the offending index,
/// - an infinite denominator reports the position of the largest input,
/// - a zero denominator (all exponentials underflowed) is its own error.
///
/// Assumes `z` has already passed validation.
fn softmax_direct(z: &[f64]) -> SoftmaxResult<Vec<f64>> {
    let mut exps: Vec<f64> = Vec::with_capacity(z.len());
    for (index, &value) in z.iter().enumerate() {
        let e = value.exp();
        if e.is_infinite() {
            return Err(SoftmaxError::Overflow { index, value });
        }
        exps.push(e);
    }

    let den: f64 = exps.iter().sum();
    if den.is_infinite() {
        // Each term was representable but the sum was not; attribute the
        // failure to the largest input.
        let (index, &value) = z
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .expect("validated input is non-empty");
        return Err(SoftmaxError::Overflow { index, value });
    }
    if den == 0.0 {
        return Err(SoftmaxError::VanishingDenominator);
    }

    Ok(exps.into_iter().map(|e| e / den).collect())
}

/// Max-shifted formulation: subtract `max(z)` before exponentiating.
///
/// Shifted inputs are ≤ 0, so every exponential lies in (0, 1] and the
/// denominator is at least 1; neither overflow nor a vanishing denominator
/// is reachable. Assumes `z` has already passed validation.
fn softmax_shift_max(z: &[f64]) -> Vec<f64> {
    let max_z = z.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let exps: Vec<f64> = z.iter().map(|&v| (v - max_z).exp()).collect();
    let den: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / den).collect()
}
