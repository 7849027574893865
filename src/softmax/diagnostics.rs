//! softmax::diagnostics — cross-implementation comparison helpers.
//!
//! Purpose
//! -------
//! Quantify agreement between two softmax implementations run on the same
//! logits: the elementwise worst-case deviation used by the cross-check
//! tests, and the Pearson correlation coefficient the demo prints in its
//! comparison-plot caption.
//!
//! Key behaviors
//! -------------
//! - [`max_abs_deviation`] returns max_i |a[i] − b[i]| for two equal-length
//!   vectors.
//! - [`pearson_r`] returns the sample correlation coefficient of two
//!   equal-length vectors, in [−1, 1] for non-degenerate inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both helpers require equal lengths and at least one element, and
//!   assume finite entries (the vectors compared here are softmax outputs,
//!   which are finite by construction).
//! - `pearson_r` of a zero-variance vector is undefined; the helper returns
//!   NaN in that case rather than erroring, matching the convention of
//!   standard correlation routines.
//!
//! Conventions
//! -----------
//! - Errors are reported via the crate-local [`SoftmaxError`] enum; no I/O,
//!   no logging.
//!
//! Downstream usage
//! ----------------
//! - The demo binary feeds both softmax paths the same logits and reports
//!   `pearson_r` in the comparison plot; integration tests assert
//!   `max_abs_deviation` stays below 1e-5.
//!
//! Testing notes
//! -------------
//! - Unit tests cover identical vectors (deviation 0, r = 1), a known
//!   deviation, perfect anticorrelation, and the length-mismatch error.

use crate::softmax::errors::{SoftmaxError, SoftmaxResult};

/// Compute the elementwise worst-case deviation max_i |a[i] − b[i]|.
///
/// Parameters
/// ----------
/// - `a`, `b`: `&[f64]`
///   Equal-length, non-empty vectors (typically two softmax outputs for
///   the same logits).
///
/// Returns
/// -------
/// `SoftmaxResult<f64>`
///   The largest absolute elementwise difference.
///
/// Errors
/// ------
/// - `SoftmaxError::EmptyInput` when the vectors are empty.
/// - `SoftmaxError::LengthMismatch` when the lengths differ.
pub fn max_abs_deviation(a: &[f64], b: &[f64]) -> SoftmaxResult<f64> {
    check_comparable(a, b)?;

    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0_f64, f64::max))
}

/// Compute the sample Pearson correlation coefficient of two vectors.
///
/// Parameters
/// ----------
/// - `a`, `b`: `&[f64]`
///   Equal-length, non-empty vectors.
///
/// Returns
/// -------
/// `SoftmaxResult<f64>`
///   r = cov(a, b) / (std(a) · std(b)). NaN when either vector has zero
///   variance (the coefficient is undefined there).
///
/// Errors
/// ------
/// - `SoftmaxError::EmptyInput` when the vectors are empty.
/// - `SoftmaxError::LengthMismatch` when the lengths differ.
///
/// Notes
/// -----
/// - Uses the centered two-pass formula: one pass for the means, one for
///   the cross- and self-products. Adequate for the demo-sized vectors
///   this crate compares.
pub fn pearson_r(a: &[f64], b: &[f64]) -> SoftmaxResult<f64> {
    check_comparable(a, b)?;

    let mean_a = calc_mean(a);
    let mean_b = calc_mean(b);

    let mut cov = 0.0_f64;
    let mut var_a = 0.0_f64;
    let mut var_b = 0.0_f64;
    for (&x, &y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    Ok(cov / (var_a.sqrt() * var_b.sqrt()))
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Shared shape guard for the pairwise helpers: non-empty, equal lengths.
#[inline]
fn check_comparable(a: &[f64], b: &[f64]) -> SoftmaxResult<()> {
    if a.is_empty() {
        return Err(SoftmaxError::EmptyInput);
    }
    if a.len() != b.len() {
        return Err(SoftmaxError::LengthMismatch { expected: a.len(), actual: b.len() });
    }
    Ok(())
}

/// Arithmetic mean of a non-empty slice.
#[inline]
fn calc_mean(data: &[f64]) -> f64 {
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}
