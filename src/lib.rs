//! rust_softmax — the softmax transform with a plotting demo and Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the softmax routines to Python via the `_rust_softmax` extension
//! module. The crate implements one functional unit — the softmax transform —
//! in two formulations (literal and max-shifted), together with its Jacobian,
//! an independent vectorized reference activation, and comparison
//! diagnostics. A demo binary reproduces the classic teaching sequence:
//! generate logits, transform, plot, cross-check.
//!
//! Key behaviors
//! -------------
//! - Re-export the core [`softmax`] module as the public crate surface.
//! - When the `python-bindings` feature is enabled, define the
//!   `#[pyfunction]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_softmax` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner [`softmax`] module; this
//!   file performs only FFI glue, input extraction, and error mapping.
//! - The Python-visible functions mirror the invariants and signatures of
//!   their Rust counterparts; on successful extraction, the invariants
//!   documented in the core module are assumed to hold.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as `SoftmaxError` values
//!   internally and converted to `ValueError` at the PyO3 boundary.
//! - The extraction helper accepts 1-D `numpy.ndarray`, `pandas.Series`
//!   (via `to_numpy`), or any sequence of float64, in that order of
//!   preference.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the [`softmax`] module and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_softmax` module defined
//!   here and wraps its functions in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner module
//!   and by the crate's integration tests; binding smoke tests belong at
//!   the Python level.

pub mod softmax;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use crate::softmax::Stability;

/// Extract a 1-D float64 vector from a numpy array, pandas Series, or
/// Python sequence.
///
/// Tries, in order: a contiguous `PyReadonlyArray1<f64>`, the object's
/// `to_numpy(copy=False)` result, and a plain `Vec<f64>` extraction. The
/// copy into a Rust-owned buffer is the only allocation on the happy path.
#[cfg(feature = "python-bindings")]
fn extract_logits<'py>(raw: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray1<f64>>() {
        if let Ok(slice) = arr.as_slice() {
            return Ok(slice.to_vec());
        }
    }

    if let Ok(obj) = raw.call_method("to_numpy", (false,), None) {
        if let Ok(arr) = obj.extract::<PyReadonlyArray1<f64>>() {
            if let Ok(slice) = arr.as_slice() {
                return Ok(slice.to_vec());
            }
        }
    }

    raw.extract::<Vec<f64>>().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })
}

/// Softmax transform over a 1-D array of logits.
///
/// Python signature: `softmax(data, /, stable=True)`. With `stable=True`
/// the max-shifted formulation is used (never overflows on finite input);
/// with `stable=False` the literal formulation runs and range failures
/// raise `ValueError`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "softmax")]
#[pyo3(signature = (data, stable = true), text_signature = "(data, /, stable=True)")]
fn py_softmax<'py>(data: &Bound<'py, PyAny>, stable: bool) -> PyResult<Vec<f64>> {
    let logits = extract_logits(data)?;
    let mode = if stable { Stability::ShiftMax } else { Stability::Direct };
    let sigma = crate::softmax::softmax_with(&logits, mode).map_err(PyErr::from)?;
    Ok(sigma)
}

/// Softmax Jacobian over a 1-D array of logits, as a row-major nested list.
///
/// Python signature: `jacobian(data, /)`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "jacobian")]
#[pyo3(text_signature = "(data, /)")]
fn py_jacobian<'py>(data: &Bound<'py, PyAny>) -> PyResult<Vec<Vec<f64>>> {
    let logits = extract_logits(data)?;
    let jac = crate::softmax::jacobian(&logits)?;

    // Convert Array2<f64> → Vec<Vec<f64>> (row-major)
    let (nrows, _ncols) = jac.dim();
    let mut out = Vec::with_capacity(nrows);
    for i in 0..nrows {
        out.push(jac.row(i).to_vec());
    }
    Ok(out)
}

/// _rust_softmax — PyO3 module initializer for the Python extension.
///
/// Registers the `softmax` and `jacobian` functions. Invoked automatically
/// by Python when importing the compiled extension; not called directly by
/// user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_softmax<'py>(m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_softmax, m)?)?;
    m.add_function(wrap_pyfunction!(py_jacobian, m)?)?;
    Ok(())
}
