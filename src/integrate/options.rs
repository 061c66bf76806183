//! integrate::options — configuration for tanh-sinh quadrature.
//!
//! Purpose
//! -------
//! Collect the termination tolerances, budgets, and logging switch of the
//! quadrature engine in one validated value, so call sites pass explicit
//! options instead of loose arguments.
//!
//! Key behaviors
//! -------------
//! - [`TanhSinhOptions::new`] validates every field via
//!   `integrate::validation` and never panics.
//! - [`TanhSinhOptions::default`] reproduces the reference defaults
//!   (`maxfun = 5000`, `maxiter = 10`, `atol = 0`, `rtol = 1e-14`,
//!   `minweight = 1e-100`, quiet).
//!
//! Invariants & assumptions
//! ------------------------
//! - Fields are public; the engine re-validates them on every call, so a
//!   mutated options value can never reach the iteration loop unchecked.
//!
//! Notes
//! -----
//! - With the defaults, level 9 would push the evaluation count past
//!   `maxfun`, so the engine stops with a function-limit status before the
//!   iteration limit is reached. Raising one budget alone has no effect;
//!   both must be increased.

use crate::integrate::{
    errors::IntegrateResult,
    validation::{validate_budgets, validate_tolerances},
};

/// Default function-evaluation budget.
pub const DEFAULT_MAXFUN: usize = 5000;
/// Default number of refinement levels.
pub const DEFAULT_MAXITER: usize = 10;
/// Default absolute tolerance.
pub const DEFAULT_ATOL: f64 = 0.0;
/// Default relative tolerance.
pub const DEFAULT_RTOL: f64 = 1e-14;
/// Default smallest admissible quadrature weight.
pub const DEFAULT_MINWEIGHT: f64 = 1e-100;

/// TanhSinhOptions — engine configuration.
///
/// Fields
/// ------
/// - `maxfun`: `usize`
///   Cap on the number of points at which the *user* integrand is evaluated.
///   A doubly-infinite integral costs two evaluations per abscissa.
/// - `maxiter`: `usize`
///   Cap on the number of refinement levels.
/// - `atol`: `f64`
///   Absolute tolerance on the error estimate (`>= 0`).
/// - `rtol`: `f64`
///   Relative tolerance on the error estimate (`> 0`).
/// - `minweight`: `f64`
///   Contributions whose (interval-scaled) weight is at or below this value
///   are ignored. Larger values protect against integrand overflow near
///   endpoint singularities at some cost in accuracy.
/// - `verbose`: `bool`
///   When `true` and the `obs_slog` feature is enabled, per-level progress is
///   logged to the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct TanhSinhOptions {
    pub maxfun: usize,
    pub maxiter: usize,
    pub atol: f64,
    pub rtol: f64,
    pub minweight: f64,
    pub verbose: bool,
}

impl TanhSinhOptions {
    /// Build validated options.
    ///
    /// # Errors
    /// Propagates the first violation found by `validate_tolerances` or
    /// `validate_budgets`.
    pub fn new(
        maxfun: usize, maxiter: usize, atol: f64, rtol: f64, minweight: f64, verbose: bool,
    ) -> IntegrateResult<Self> {
        validate_tolerances(atol, rtol, minweight)?;
        validate_budgets(maxfun, maxiter)?;
        Ok(Self { maxfun, maxiter, atol, rtol, minweight, verbose })
    }

    /// Build validated options from tolerances only, keeping default budgets
    /// and `minweight`.
    pub fn with_tolerances(atol: f64, rtol: f64) -> IntegrateResult<Self> {
        Self::new(DEFAULT_MAXFUN, DEFAULT_MAXITER, atol, rtol, DEFAULT_MINWEIGHT, false)
    }
}

impl Default for TanhSinhOptions {
    fn default() -> Self {
        Self {
            maxfun: DEFAULT_MAXFUN,
            maxiter: DEFAULT_MAXITER,
            atol: DEFAULT_ATOL,
            rtol: DEFAULT_RTOL,
            minweight: DEFAULT_MINWEIGHT,
            verbose: false,
        }
    }
}
