//! softmax::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by the softmax transform and
//! its companion routines, together with a conversion layer to Python
//! exceptions for PyO3-based bindings. This keeps validation and numeric
//! failures localized while exposing a clean error surface to both Rust and
//! Python.
//!
//! Key behaviors
//! -------------
//! - Define [`SoftmaxResult`] and [`SoftmaxError`] as the canonical result
//!   and error types for the transform, its Jacobian, the reference
//!   activation, and the diagnostics helpers.
//! - Attach human-readable `Display` messages to each error variant so that
//!   diagnostics and logs are meaningful without additional context.
//! - Implement `From<SoftmaxError> for PyErr` to map Rust-side validation and
//!   numeric errors into `PyValueError` values visible to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Modules which use this error type are expected to validate their inputs
//!   (length, finiteness) and return [`SoftmaxResult<T>`] instead of
//!   panicking.
//! - `SoftmaxError` values are small, cheap to clone, and suitable for use in
//!   both unit tests and higher-level orchestration code.
//! - The Python-facing conversion preserves the Rust error message verbatim
//!   inside the `PyValueError` string representation.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g., "input
//!   must not be empty", "value must be finite") rather than low-level
//!   details.
//! - Overflow and underflow of the denominator are distinct variants:
//!   calling an all-underflow denominator an "overflow" would mislabel the
//!   failure for anyone reading the message.
//!
//! Downstream usage
//! ----------------
//! - The transform, validation, reference, and diagnostics modules all return
//!   [`SoftmaxResult<T>`] to propagate failures cleanly to callers.
//! - Python bindings expose functions that raise `ValueError`; they do not
//!   pattern-match on [`SoftmaxError`] directly.
//! - Higher-level Rust code may match on [`SoftmaxError`] variants to decide,
//!   for example, to retry a `Direct`-mode failure with `ShiftMax`.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (offending index or value).
//! - The `From<SoftmaxError> for PyErr` conversion is exercised by
//!   Python-level tests, not here.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type SoftmaxResult<T> = Result<T, SoftmaxError>;

/// SoftmaxError — error conditions for the softmax transform.
///
/// Purpose
/// -------
/// Represent all validation and numeric failures that can occur when
/// computing the softmax transform, its Jacobian, or the elementwise
/// comparison of two probability vectors.
///
/// Variants
/// --------
/// - `EmptyInput`
///   The input sequence is empty; a sum of zero terms makes normalization
///   undefined (division by zero).
/// - `NonFiniteInput { index, value }`
///   An input element is NaN or ±∞ and lies outside the transform's domain
///   of finite reals.
/// - `Overflow { index, value }`
///   In `Direct` mode, `exp(value)` (or the accumulated denominator) left
///   the representable `f64` range. Surfaced instead of silently producing
///   `inf`/`NaN`.
/// - `VanishingDenominator`
///   In `Direct` mode, every exponential underflowed to zero, so the
///   denominator is exactly zero and normalization is undefined.
/// - `LengthMismatch { expected, actual }`
///   Two vectors passed to an elementwise comparison have different lengths.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending index or value)
///   to allow downstream logging and debugging without leaking large data
///   structures.
/// - `Overflow` and `VanishingDenominator` are never produced by the
///   max-shifted formulation; only the literal `Direct` path can reach them.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   so it can be used with idiomatic `?`-based error propagation in Rust.
/// - A [`From<SoftmaxError> for PyErr`] implementation maps all of these
///   cases to `PyValueError` at the Python boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SoftmaxError {
    //------ Input validation errors ------
    EmptyInput,
    NonFiniteInput { index: usize, value: f64 },
    //------ Numeric range errors ------
    Overflow { index: usize, value: f64 },
    VanishingDenominator,
    //------ Comparison errors ------
    LengthMismatch { expected: usize, actual: usize },
}

impl std::error::Error for SoftmaxError {}

impl std::fmt::Display for SoftmaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoftmaxError::EmptyInput => {
                write!(f, "Input must not be empty: softmax normalizes over at least one term.")
            }
            SoftmaxError::NonFiniteInput { index, value } => {
                write!(f, "Invalid input value {value} at index {index}. Must be a finite number.")
            }
            SoftmaxError::Overflow { index, value } => {
                write!(
                    f,
                    "Exponential overflow at index {index} (input value {value}): result exceeds \
                     the representable f64 range. Consider the max-shifted formulation."
                )
            }
            SoftmaxError::VanishingDenominator => {
                write!(
                    f,
                    "All exponentials underflowed to zero; the normalizing denominator vanished. \
                     Consider the max-shifted formulation."
                )
            }
            SoftmaxError::LengthMismatch { expected, actual } => {
                write!(f, "Length mismatch: expected {expected} elements, got {actual}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SoftmaxError> for PyErr {
    fn from(err: SoftmaxError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for SoftmaxError variants.
    // - Embedding of payload values (index, value, lengths) into messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<SoftmaxError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled by
    //   Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `SoftmaxError::EmptyInput` formats to a non-empty,
    // human-readable message.
    //
    // Given
    // -----
    // - A `SoftmaxError::EmptyInput` value.
    //
    // Expect
    // ------
    // - `format!("{err}")` is non-empty.
    fn empty_input_has_nonempty_display_message() {
        // Arrange
        let err = SoftmaxError::EmptyInput;

        // Act
        let msg = err.to_string();

        // Assert
        assert!(!msg.trim().is_empty(), "Display message for EmptyInput should not be empty.");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `SoftmaxError::NonFiniteInput` includes the offending
    // index in its `Display` representation.
    //
    // Given
    // -----
    // - A `NonFiniteInput` with index = 4 and value = NaN.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "4".
    fn non_finite_input_includes_index_in_display() {
        // Arrange
        let err = SoftmaxError::NonFiniteInput { index: 4, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('4'), "Display message should include offending index.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `SoftmaxError::Overflow` includes the offending input
    // value in its `Display` representation.
    //
    // Given
    // -----
    // - An `Overflow` with index = 0 and value = 1000.0.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "1000".
    fn overflow_includes_payload_in_display() {
        // Arrange
        let err = SoftmaxError::Overflow { index: 0, value: 1000.0 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("1000"),
            "Display message should include offending input value.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `SoftmaxError::LengthMismatch` reports both the expected
    // and the actual length.
    //
    // Given
    // -----
    // - A `LengthMismatch` with expected = 3 and actual = 5.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "3" and "5".
    fn length_mismatch_includes_both_lengths_in_display() {
        // Arrange
        let err = SoftmaxError::LengthMismatch { expected: 3, actual: 5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('3') && msg.contains('5'),
            "Display message should include expected and actual lengths.\nGot: {msg}"
        );
    }
}
