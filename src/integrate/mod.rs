//! integrate — adaptive tanh-sinh quadrature: pairs, transforms, engine, errors.
//!
//! Purpose
//! -------
//! Provide a self-contained numerical integration layer built on the
//! double-exponential (tanh-sinh) rule. This is the main entry point of the
//! crate for Rust callers and the surface wrapped by the Python bindings.
//!
//! Key behaviors
//! -------------
//! - Generate per-level abscissa complements and weights in [`pairs`].
//! - Map reversed and infinite limits onto a finite interval in
//!   [`transform`] through a chain of integrand wrappers.
//! - Run the level-by-level refinement, error heuristic and termination
//!   logic in [`tanh_sinh`] via [`tanhsinh`].
//! - Report results and terminations through [`QuadratureResult`] and
//!   [`QuadStatus`] in [`outcome`].
//! - Validate limits, tolerances and budgets in [`validation`], configured
//!   through [`TanhSinhOptions`] in [`options`].
//! - Centralize usage and integrand failures in [`errors`]
//!   (`IntegrateError`, `IntegrateResult`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Integrands are batched `Fn(&Array1<f64>) -> IntegrateResult<Array1<f64>>`
//!   closures that return one value per abscissa; use [`elementwise`] to lift
//!   a scalar function.
//! - The integrand is smooth in the interior of the interval. Integrable
//!   endpoint singularities are fine; interior singularities must be split
//!   off by the caller.
//! - Every call is independent: no caches, no global state.
//!
//! Conventions
//! -----------
//! - Usage problems are `Err(IntegrateError)`; numerical terminations
//!   (budgets, non-finite values) are `Ok(QuadratureResult)` with
//!   `success() == false`.
//! - Logging happens only with the `obs_slog` feature and
//!   `TanhSinhOptions::verbose`.
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!   1. Build [`TanhSinhOptions`] (or take the default).
//!   2. Call [`tanhsinh`] with a batched integrand and limits.
//!   3. Inspect `success()`, `integral()` and `error()`.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own contract; end-to-end
//!   accuracy against closed forms lives in
//!   `tests/integration_tanhsinh_pipeline.rs`.

pub mod errors;
mod observe;
pub mod options;
pub mod outcome;
pub mod pairs;
pub mod tanh_sinh;
pub mod transform;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{IntegrateError, IntegrateResult};
pub use self::options::TanhSinhOptions;
pub use self::outcome::{QuadStatus, QuadratureResult};
pub use self::tanh_sinh::{elementwise, tanhsinh};

// ---- Optional convenience prelude for downstream crates -------------------
//
//     use rust_quadrature::integrate::prelude::*;

pub mod prelude {
    pub use super::{
        IntegrateError, IntegrateResult, QuadStatus, QuadratureResult, TanhSinhOptions,
        elementwise, tanhsinh,
    };
}
