//! integrate::transform — map any interval onto the engine's finite domain.
//!
//! Purpose
//! -------
//! Rewrite an integrand and its limits so that the quadrature engine always
//! works on a finite, correctly oriented interval, handling reversed limits
//! and one or two infinite endpoints by change of variables.
//!
//! Key behaviors
//! -------------
//! Each rewrite is a standalone wrapper over a boxed integrand:
//! - [`negate`]: `g(x) = −f(x)` (reversed orientation).
//! - [`fold_symmetric`]: `g(x) = f(x) + f(−x)` (doubly-infinite limits folded
//!   onto `(0, ∞)`; two user evaluations per abscissa).
//! - [`reflect`]: `g(x) = f(−x)` (moves a lone lower infinity to the top).
//! - [`compactify`]: `g(x) = f(1/x − 1 + a) · x⁻²` (maps `(a, ∞)` onto
//!   `(0, 1)`).
//!
//! [`standardize`] applies them in that order and returns a
//! [`StandardProblem`] carrying the rewritten integrand, the finite limits,
//! and the evaluation multiplier.
//!
//! Invariants & assumptions
//! ------------------------
//! - Limits are not NaN (checked by `integrate::validation`).
//! - After [`standardize`], `a ≤ b` and both limits are finite.
//! - Reversing the limits only wraps the integrand in [`negate`], so the
//!   integral over `(b, a)` is the exact negative of the one over `(a, b)`.
//! - Equal infinite limits (`(∞, ∞)` or `(−∞, −∞)`) are not swapped and fold
//!   like the whole real line, so they integrate over `(−∞, ∞)`.
//!
//! Conventions
//! -----------
//! - Integrands are batched: they receive a 1-D array of abscissas and return
//!   an array of the same length. Wrappers preserve that contract.

use crate::integrate::errors::IntegrateResult;
use ndarray::Array1;

/// A batched integrand behind a trait object, as produced by the transform
/// pipeline.
pub type BoxedIntegrand<'a> = Box<dyn Fn(&Array1<f64>) -> IntegrateResult<Array1<f64>> + 'a>;

/// StandardProblem — integrand and limits after all rewrites.
///
/// Fields
/// ------
/// - `integrand`: rewritten batched integrand.
/// - `a`, `b`: finite limits with `a <= b`.
/// - `feval_factor`: number of user-integrand evaluations performed per
///   abscissa passed to `integrand` (1, or 2 after [`fold_symmetric`]).
pub struct StandardProblem<'a> {
    pub integrand: BoxedIntegrand<'a>,
    pub a: f64,
    pub b: f64,
    pub feval_factor: usize,
}

impl std::fmt::Debug for StandardProblem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardProblem")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("feval_factor", &self.feval_factor)
            .finish_non_exhaustive()
    }
}

/// `g(x) = −f(x)`.
pub fn negate<'a>(f: BoxedIntegrand<'a>) -> BoxedIntegrand<'a> {
    Box::new(move |x: &Array1<f64>| -> IntegrateResult<Array1<f64>> { Ok(-f(x)?) })
}

/// `g(x) = f(x) + f(−x)`.
pub fn fold_symmetric<'a>(f: BoxedIntegrand<'a>) -> BoxedIntegrand<'a> {
    Box::new(move |x: &Array1<f64>| -> IntegrateResult<Array1<f64>> {
        let right = f(x)?;
        let left = f(&x.mapv(|v| -v))?;
        Ok(right + left)
    })
}

/// `g(x) = f(−x)`.
pub fn reflect<'a>(f: BoxedIntegrand<'a>) -> BoxedIntegrand<'a> {
    Box::new(move |x: &Array1<f64>| f(&x.mapv(|v| -v)))
}

/// `g(x) = f(1/x − 1 + a) · x⁻²`, mapping `(a, ∞)` onto `(0, 1)`.
pub fn compactify<'a>(f: BoxedIntegrand<'a>, a: f64) -> BoxedIntegrand<'a> {
    Box::new(move |x: &Array1<f64>| -> IntegrateResult<Array1<f64>> {
        let t = x.mapv(|v| 1.0 / v - 1.0 + a);
        let jacobian = x.mapv(|v| v.powi(-2));
        Ok(f(&t)? * &jacobian)
    })
}

/// Rewrite `(f, a, b)` into an equivalent problem on a finite interval.
///
/// Rules, in order
/// ---------------
/// 1. `b < a`: swap the limits and [`negate`].
/// 2. Both limits infinite: [`fold_symmetric`], limits `(0, ∞)`, factor 2.
/// 3. Otherwise, lower limit infinite: [`reflect`], limits `(−b, −a)`.
/// 4. Upper limit infinite: [`compactify`] about `a`, limits `(0, 1)`.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use rust_quadrature::integrate::transform::standardize;
///
/// let problem = standardize(Box::new(|x: &ndarray::Array1<f64>| Ok(x.clone())), f64::NEG_INFINITY, 3.0);
/// assert_eq!((problem.a, problem.b, problem.feval_factor), (0.0, 1.0, 1));
///
/// // x = 0.5 maps to t = 1/0.5 − 1 + (−3) = −2, reflected to 2, times 0.5⁻² = 4.
/// let y = (problem.integrand)(&array![0.5]).unwrap();
/// assert_eq!(y[0], 8.0);
/// ```
pub fn standardize<'a>(f: BoxedIntegrand<'a>, a: f64, b: f64) -> StandardProblem<'a> {
    let (mut f, mut a, mut b) = (f, a, b);

    if b < a {
        f = negate(f);
        std::mem::swap(&mut a, &mut b);
    }

    let mut feval_factor = 1;
    if a.is_infinite() && b.is_infinite() {
        f = fold_symmetric(f);
        a = 0.0;
        b = f64::INFINITY;
        feval_factor = 2;
    } else if a.is_infinite() {
        f = reflect(f);
        (a, b) = (-b, -a);
    }

    if b.is_infinite() {
        f = compactify(f, a);
        a = 0.0;
        b = 1.0;
    }

    StandardProblem { integrand: f, a, b, feval_factor }
}
