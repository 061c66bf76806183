//! integrate::outcome — termination status and result of a quadrature run.
//!
//! Purpose
//! -------
//! Describe how a tanh-sinh run ended and what it produced, in a form that
//! Rust callers and the Python bindings can both consume without knowing
//! anything about the engine's internal state.
//!
//! Key behaviors
//! -------------
//! - [`QuadStatus`] is a closed set of terminations with a fixed integer code
//!   and a fixed human-readable message per variant.
//! - [`QuadratureResult`] is an immutable value built once at the end of a
//!   run. `success` and `message` are derived from `status` on access and can
//!   never disagree with it.
//!
//! Invariants & assumptions
//! ------------------------
//! - `integral` is NaN when no level finished evaluation; `error` is NaN until
//!   the engine has completed at least three levels.
//! - `feval` never exceeds the `maxfun` budget of the run that produced it.
//! - A finished result never carries [`QuadStatus::InProgress`]; that status
//!   only exists while the engine loop is running.

use std::fmt;

/// QuadStatus — how a quadrature run terminated.
///
/// Variants
/// --------
/// - `InProgress` (code −1): the engine is still iterating.
/// - `Converged` (code 0): the error estimate met `rtol` or `atol`.
/// - `FunctionLimit` (code 1): the next level would exceed `maxfun`.
/// - `IterationLimit` (code 2): `maxiter` levels ran without convergence.
/// - `InvalidValue` (code 3): a non-finite contribution was met at a point
///   that was not filtered out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum QuadStatus {
    InProgress,
    Converged,
    FunctionLimit,
    IterationLimit,
    InvalidValue,
}

impl QuadStatus {
    /// Integer status code.
    pub fn code(self) -> i32 {
        match self {
            QuadStatus::InProgress => -1,
            QuadStatus::Converged => 0,
            QuadStatus::FunctionLimit => 1,
            QuadStatus::IterationLimit => 2,
            QuadStatus::InvalidValue => 3,
        }
    }

    /// Fixed description of the termination.
    pub fn message(self) -> &'static str {
        match self {
            QuadStatus::InProgress => "Iteration in progress.",
            QuadStatus::Converged => {
                "The algorithm completed successfully, and the error estimate meets the \
                 requested tolerance."
            }
            QuadStatus::FunctionLimit => {
                "The error estimate does not meet the specified tolerance, but performing \
                 additional iterations cause the function evaluation limit to be exceeded."
            }
            QuadStatus::IterationLimit => {
                "The error estimate does not meet the specified tolerance, but performing \
                 additional iterations would cause the iteration limit to be exceeded."
            }
            QuadStatus::InvalidValue => {
                "An invalid value (e.g. overflow, NaN) was encountered within the integration \
                 interval. See documentation notes for more information."
            }
        }
    }

    /// `true` only for [`QuadStatus::Converged`].
    #[inline]
    pub fn is_success(self) -> bool {
        self == QuadStatus::Converged
    }
}

impl fmt::Display for QuadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

/// QuadratureResult — outcome of one tanh-sinh integration.
///
/// Purpose
/// -------
/// Report the integral estimate together with its error estimate, the number
/// of integrand evaluations spent, and the termination status.
///
/// Fields
/// ------
/// - `integral`: `f64`
///   Last computed running estimate `Sₙ`, or NaN if none was computed.
/// - `error`: `f64`
///   Absolute error estimate `max(ε, rerr)·|Sₙ|` from the last level that
///   ran the error heuristic, or NaN.
/// - `feval`: `usize`
///   Number of points at which the user integrand was evaluated.
/// - `status`: [`QuadStatus`]
///   Termination reason.
///
/// Invariants
/// ----------
/// - `success() == (status() == QuadStatus::Converged)`.
/// - `message()` is always `status().message()`.
///
/// Notes
/// -----
/// - Fields are private; construction happens only inside the engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadratureResult {
    integral: f64,
    error: f64,
    feval: usize,
    status: QuadStatus,
}

impl QuadratureResult {
    pub(crate) fn new(integral: f64, error: f64, feval: usize, status: QuadStatus) -> Self {
        QuadratureResult { integral, error, feval, status }
    }

    /// Integral estimate.
    pub fn integral(&self) -> f64 {
        self.integral
    }

    /// Absolute error estimate.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Number of user-integrand evaluations.
    pub fn feval(&self) -> usize {
        self.feval
    }

    pub fn success(&self) -> bool {
        self.status.is_success()
    }

    pub fn status(&self) -> QuadStatus {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.status.message()
    }
}

impl fmt::Display for QuadratureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "integral = {:e}, error = {:e}, feval = {}, status = {}",
            self.integral,
            self.error,
            self.feval,
            self.status.code()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // The code table is fixed and only `Converged` counts as success.
    //
    // Given
    // -----
    // - Every `QuadStatus` variant.
    //
    // Expect
    // ------
    // - Codes −1..=3 in declaration order; `is_success` true only for
    //   `Converged`.
    fn quad_status_codes_and_success_flag_follow_the_table() {
        let all = [
            QuadStatus::InProgress,
            QuadStatus::Converged,
            QuadStatus::FunctionLimit,
            QuadStatus::IterationLimit,
            QuadStatus::InvalidValue,
        ];

        let codes: Vec<i32> = all.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![-1, 0, 1, 2, 3]);

        for status in all {
            assert_eq!(status.is_success(), status == QuadStatus::Converged);
            assert!(!status.message().is_empty());
        }
    }

    #[test]
    fn quad_status_messages_match_reference_wording() {
        assert_eq!(QuadStatus::InProgress.message(), "Iteration in progress.");
        assert_eq!(
            QuadStatus::Converged.message(),
            "The algorithm completed successfully, and the error estimate meets the requested \
             tolerance."
        );
        assert!(QuadStatus::FunctionLimit.message().contains("function evaluation limit"));
        assert!(QuadStatus::IterationLimit.message().contains("iteration limit"));
        assert!(QuadStatus::InvalidValue.message().starts_with("An invalid value (e.g. overflow"));
    }

    #[test]
    // Purpose
    // -------
    // `success` and `message` are derived from `status`, so a result can
    // never report a success flag that contradicts its status.
    //
    // Given
    // -----
    // - A converged result and a function-limit result with NaN estimates.
    //
    // Expect
    // ------
    // - Accessors return the stored values; success/message track status.
    fn quadrature_result_derives_success_and_message_from_status() {
        let ok = QuadratureResult::new(1.5, 1e-16, 42, QuadStatus::Converged);
        assert_eq!(ok.integral(), 1.5);
        assert_eq!(ok.error(), 1e-16);
        assert_eq!(ok.feval(), 42);
        assert!(ok.success());
        assert_eq!(ok.message(), QuadStatus::Converged.message());

        let limited = QuadratureResult::new(f64::NAN, f64::NAN, 0, QuadStatus::FunctionLimit);
        assert!(limited.integral().is_nan());
        assert!(limited.error().is_nan());
        assert!(!limited.success());
        assert_eq!(limited.status().code(), 1);
    }

    #[test]
    fn quadrature_result_display_reports_status_code() {
        let res = QuadratureResult::new(2.0, 0.5, 14, QuadStatus::IterationLimit);

        let text = res.to_string();

        assert!(text.contains("feval = 14"));
        assert!(text.ends_with("status = 2"));
    }
}
