//! integrate::validation — input guards for tanh-sinh quadrature.
//!
//! Purpose
//! -------
//! Centralize the checks performed on integration limits, tolerances, and
//! budgets before the quadrature engine runs, so that every entry point
//! rejects malformed input the same way.
//!
//! Key behaviors
//! -------------
//! - [`validate_limits`]: `a` and `b` must not be NaN (infinities are fine).
//! - [`validate_tolerances`]: `rtol` and `minweight` strictly positive and
//!   finite; `atol` non-negative and finite; none NaN.
//! - [`validate_budgets`]: `maxfun` and `maxiter` strictly positive.
//! - [`validate_options`]: the three tolerance/budget checks applied to a
//!   [`TanhSinhOptions`] value.
//!
//! Invariants & assumptions
//! ------------------------
//! - Real-ness and integer-ness are carried by the types (`f64`, `usize`);
//!   only value ranges are checked here.
//! - Checks run in a fixed order (limits, tolerances, budgets) and the first
//!   violation is reported.
//!
//! Conventions
//! -----------
//! - Pure functions with no allocation beyond error construction.
//! - Errors are reported as [`IntegrateError`] variants naming the offending
//!   parameter.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each error branch and the accepting paths, including
//!   infinite limits and `atol = 0`.

use crate::integrate::{
    errors::{IntegrateError, IntegrateResult},
    options::TanhSinhOptions,
};

/// Validate the integration limits.
///
/// Either limit may be infinite; NaN is rejected.
///
/// # Errors
/// Returns [`IntegrateError::InvalidLimit`] naming `a` or `b`.
pub fn validate_limits(a: f64, b: f64) -> IntegrateResult<()> {
    for (name, value) in [("a", a), ("b", b)] {
        if value.is_nan() {
            return Err(IntegrateError::InvalidLimit {
                name,
                value,
                reason: "Integration limits must be real numbers (not NaN).",
            });
        }
    }
    Ok(())
}

/// Validate the termination tolerances and the minimum admissible weight.
///
/// Rules
/// -----
/// - `rtol`: finite and `> 0`.
/// - `minweight`: finite and `> 0`.
/// - `atol`: finite and `>= 0`.
///
/// # Errors
/// - [`IntegrateError::InvalidRtol`], [`IntegrateError::InvalidMinWeight`],
///   or [`IntegrateError::InvalidAtol`] for the first violated rule.
pub fn validate_tolerances(atol: f64, rtol: f64, minweight: f64) -> IntegrateResult<()> {
    if !rtol.is_finite() {
        return Err(IntegrateError::InvalidRtol { value: rtol, reason: "`rtol` must be finite." });
    }
    if rtol <= 0.0 {
        return Err(IntegrateError::InvalidRtol { value: rtol, reason: "`rtol` must be positive." });
    }
    if !minweight.is_finite() {
        return Err(IntegrateError::InvalidMinWeight {
            value: minweight,
            reason: "`minweight` must be finite.",
        });
    }
    if minweight <= 0.0 {
        return Err(IntegrateError::InvalidMinWeight {
            value: minweight,
            reason: "`minweight` must be positive.",
        });
    }
    if !atol.is_finite() {
        return Err(IntegrateError::InvalidAtol { value: atol, reason: "`atol` must be finite." });
    }
    if atol < 0.0 {
        return Err(IntegrateError::InvalidAtol {
            value: atol,
            reason: "`atol` must be non-negative.",
        });
    }
    Ok(())
}

/// Validate the function-evaluation and iteration budgets.
///
/// # Errors
/// - [`IntegrateError::InvalidMaxFun`] if `maxfun == 0`.
/// - [`IntegrateError::InvalidMaxIter`] if `maxiter == 0`.
pub fn validate_budgets(maxfun: usize, maxiter: usize) -> IntegrateResult<()> {
    if maxfun == 0 {
        return Err(IntegrateError::InvalidMaxFun {
            maxfun,
            reason: "`maxfun` must be positive.",
        });
    }
    if maxiter == 0 {
        return Err(IntegrateError::InvalidMaxIter {
            maxiter,
            reason: "`maxiter` must be positive.",
        });
    }
    Ok(())
}

/// Validate every numeric field of a [`TanhSinhOptions`].
///
/// `TanhSinhOptions` has public fields, so the engine calls this on entry
/// even for options built through [`TanhSinhOptions::new`].
pub fn validate_options(opts: &TanhSinhOptions) -> IntegrateResult<()> {
    validate_tolerances(opts.atol, opts.rtol, opts.minweight)?;
    validate_budgets(opts.maxfun, opts.maxiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Acceptance of finite and infinite limits, rejection of NaN limits.
    // - Every error branch of `validate_tolerances` and `validate_budgets`.
    // - `validate_options` on the default configuration.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Infinite limits are legal inputs; only NaN is rejected.
    //
    // Given
    // -----
    // - (−∞, ∞), (0, ∞), (NaN, 1), (0, NaN).
    //
    // Expect
    // ------
    // - The first two succeed; the NaN cases fail naming `a` / `b`.
    fn validate_limits_accepts_infinities_and_rejects_nan() {
        assert!(validate_limits(f64::NEG_INFINITY, f64::INFINITY).is_ok());
        assert!(validate_limits(0.0, f64::INFINITY).is_ok());

        match validate_limits(f64::NAN, 1.0) {
            Err(IntegrateError::InvalidLimit { name: "a", .. }) => (),
            other => panic!("expected InvalidLimit for `a`, got {other:?}"),
        }
        match validate_limits(0.0, f64::NAN) {
            Err(IntegrateError::InvalidLimit { name: "b", .. }) => (),
            other => panic!("expected InvalidLimit for `b`, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `rtol` must be strictly positive and finite.
    //
    // Given
    // -----
    // - rtol ∈ {0, −1e-8, ∞, NaN} with otherwise valid values.
    //
    // Expect
    // ------
    // - `InvalidRtol` for every case.
    fn validate_tolerances_rejects_non_positive_or_non_finite_rtol() {
        for rtol in [0.0, -1e-8, f64::INFINITY, f64::NAN] {
            match validate_tolerances(0.0, rtol, 1e-100) {
                Err(IntegrateError::InvalidRtol { .. }) => (),
                other => panic!("expected InvalidRtol for rtol = {rtol}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // `minweight` must be strictly positive and finite.
    //
    // Given
    // -----
    // - minweight ∈ {0, −1, ∞, NaN}.
    //
    // Expect
    // ------
    // - `InvalidMinWeight` for every case.
    fn validate_tolerances_rejects_invalid_minweight() {
        for minweight in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            match validate_tolerances(0.0, 1e-14, minweight) {
                Err(IntegrateError::InvalidMinWeight { .. }) => (),
                other => panic!("expected InvalidMinWeight for {minweight}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // `atol` may be zero but not negative or non-finite.
    //
    // Given
    // -----
    // - atol = 0 (valid), atol ∈ {−1e-12, ∞, NaN} (invalid).
    //
    // Expect
    // ------
    // - Ok for zero, `InvalidAtol` otherwise.
    fn validate_tolerances_allows_zero_atol_only_when_finite_and_non_negative() {
        assert!(validate_tolerances(0.0, 1e-14, 1e-100).is_ok());

        for atol in [-1e-12, f64::INFINITY, f64::NAN] {
            match validate_tolerances(atol, 1e-14, 1e-100) {
                Err(IntegrateError::InvalidAtol { .. }) => (),
                other => panic!("expected InvalidAtol for atol = {atol}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Budgets must be strictly positive.
    //
    // Given
    // -----
    // - (0, 10), (5000, 0), (1, 1).
    //
    // Expect
    // ------
    // - `InvalidMaxFun`, `InvalidMaxIter`, Ok.
    fn validate_budgets_rejects_zero_budgets() {
        assert!(matches!(validate_budgets(0, 10), Err(IntegrateError::InvalidMaxFun { .. })));
        assert!(matches!(validate_budgets(5000, 0), Err(IntegrateError::InvalidMaxIter { .. })));
        assert!(validate_budgets(1, 1).is_ok());
    }

    #[test]
    fn validate_options_accepts_defaults_and_catches_mutated_fields() {
        let mut opts = TanhSinhOptions::default();
        assert!(validate_options(&opts).is_ok());

        opts.rtol = -1.0;
        assert!(matches!(validate_options(&opts), Err(IntegrateError::InvalidRtol { .. })));
    }
}
