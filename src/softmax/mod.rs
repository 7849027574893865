//! softmax — the softmax transform and its companions.
//!
//! Purpose
//! -------
//! Collect the crate's single functional unit — the softmax transform — and
//! the modules that support it: input validation, the error surface, a
//! vectorized reference activation for cross-checking, and comparison
//! diagnostics. The rest of the crate (demo binary, Python bindings) is
//! presentation around this module.
//!
//! Key behaviors
//! -------------
//! - Map an ordered sequence of finite reals onto the probability simplex:
//!   each output proportional to the exponential of the corresponding input,
//!   outputs strictly positive and summing to 1 up to rounding.
//! - Offer the literal and the max-shifted formulation behind an explicit
//!   [`Stability`] choice, with structured errors where the literal one
//!   leaves the representable range.
//! - Provide the transform's Jacobian and an independent vectorized
//!   activation for elementwise cross-checks.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every public entry point validates its input (non-empty, elementwise
//!   finite) before computing exponentials; validation failures surface as
//!   [`SoftmaxError`] values, never as panics.
//! - The transform is pure: no I/O, no logging, no global state.
//!
//! Conventions
//! -----------
//! - The manual path works on slices; the reference activation works on
//!   `ndarray` views. Both share the validation and error modules.
//!
//! Downstream usage
//! ----------------
//! - Rust callers import from the re-exports below or via the [`prelude`].
//! - Python callers reach these routines through the feature-gated bindings
//!   in the crate root.
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; the end-to-end pipeline
//!   (transform → reference → diagnostics) is covered by the crate's
//!   integration tests.

pub mod diagnostics;
pub mod errors;
pub mod reference;
pub mod transform;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::diagnostics::{max_abs_deviation, pearson_r};
pub use self::errors::{SoftmaxError, SoftmaxResult};
pub use self::reference::activation;
pub use self::transform::{Stability, jacobian, softmax, softmax_with};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_softmax::softmax::prelude::*;
//
// to import the main softmax surface in a single line.

pub mod prelude {
    pub use super::diagnostics::{max_abs_deviation, pearson_r};
    pub use super::errors::{SoftmaxError, SoftmaxResult};
    pub use super::reference::activation;
    pub use super::transform::{Stability, jacobian, softmax, softmax_with};
}
