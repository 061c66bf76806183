//! rust_quadrature — adaptive tanh-sinh quadrature with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the quadrature engine to Python via the `_rust_quadrature` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing classes and submodules used by the `rust_quadrature`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`integrate`) as the public crate surface.
//! - Define the `#[pyclass]` result wrapper, the `tanhsinh` `#[pyfunction]`
//!   and the `#[pymodule]` initializer for the `_rust_quadrature` extension.
//! - Register the `integrate` submodule under `rust_quadrature` so that
//!   dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in [`integrate`]; this file performs
//!   only FFI glue, the callable check, and error mapping.
//! - Python integrands receive one 1-D `float64` array per call and must
//!   return an array-like of the same length.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_quadrature.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `rust_quadrature` package.
//! - Usage errors from the core are converted to `ValueError` at the PyO3
//!   boundary; numerical terminations are reported through the returned
//!   `QuadratureResult`.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in [`integrate`] and by
//!   `tests/integration_tanhsinh_pipeline.rs`.
//! - The PyO3 surface is exercised from Python tests against the compiled
//!   extension.

pub mod integrate;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    integrate::{IntegrateError, QuadratureResult, TanhSinhOptions},
    utils::py_integrand,
};

/// PyQuadratureResult — Python-facing view of a [`QuadratureResult`].
///
/// Purpose
/// -------
/// Present the outcome of a tanh-sinh run to Python code as a read-only
/// object with `integral`, `error`, `feval`, `success`, `status` and
/// `message` attributes.
///
/// Fields
/// ------
/// - `inner`: [`QuadratureResult`]
///   Rust-side result returned by [`integrate::tanhsinh`].
///
/// Notes
/// -----
/// - Instances are created by `integrate.tanhsinh` only; Rust callers should
///   use [`QuadratureResult`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "QuadratureResult", module = "rust_quadrature.integrate", frozen)]
pub struct PyQuadratureResult {
    inner: QuadratureResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyQuadratureResult {
    /// An estimate of the integral.
    #[getter]
    pub fn integral(&self) -> f64 {
        self.inner.integral()
    }

    /// An estimate of the error.
    #[getter]
    pub fn error(&self) -> f64 {
        self.inner.error()
    }

    /// Number of points at which the integrand was evaluated.
    #[getter]
    pub fn feval(&self) -> usize {
        self.inner.feval()
    }

    #[getter]
    pub fn success(&self) -> bool {
        self.inner.success()
    }

    /// Status code: 0 converged, 1 function limit, 2 iteration limit,
    /// 3 invalid value.
    #[getter]
    pub fn status(&self) -> i32 {
        self.inner.status().code()
    }

    #[getter]
    pub fn message(&self) -> &'static str {
        self.inner.message()
    }

    fn __repr__(&self) -> String {
        format!(
            "QuadratureResult(integral={:?}, error={:?}, feval={}, success={}, status={})",
            self.inner.integral(),
            self.inner.error(),
            self.inner.feval(),
            if self.inner.success() { "True" } else { "False" },
            self.inner.status().code()
        )
    }
}

/// Evaluate a convergent integral numerically using tanh-sinh quadrature.
///
/// Parameters
/// ----------
/// - `f`: callable
///   Integrand; called with a 1-D `float64` array and must return values of
///   the same length (use `np.vectorize` for scalar functions).
/// - `a`, `b`: `float`
///   Integration limits; either may be infinite.
/// - `maxfun`, `maxiter`: `int`
///   Evaluation and level budgets (defaults 5000 and 10). Both must be
///   raised together to let the run go further.
/// - `atol`, `rtol`: `float`
///   Absolute (default 0) and relative (default 1e-14) tolerances.
/// - `minweight`: `float`
///   Smallest weight whose contribution is kept (default 1e-100).
/// - `verbose`: `bool`
///   Log per-level progress when built with `obs_slog`.
///
/// Errors
/// ------
/// - `ValueError` if `f` is not callable, an option is invalid, or the
///   integrand raises or returns the wrong number of values.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "tanhsinh",
    signature = (
        f,
        a,
        b,
        /,
        maxfun = 5000,
        maxiter = 10,
        atol = 0.0,
        rtol = 1e-14,
        minweight = 1e-100,
        verbose = false,
    ),
    text_signature = "(f, a, b, /, maxfun=5000, maxiter=10, atol=0.0, rtol=1e-14, \
                      minweight=1e-100, verbose=False)"
)]
#[allow(clippy::too_many_arguments)]
pub fn py_tanhsinh<'py>(
    py: Python<'py>, f: &Bound<'py, PyAny>, a: f64, b: f64, maxfun: usize, maxiter: usize,
    atol: f64, rtol: f64, minweight: f64, verbose: bool,
) -> PyResult<PyQuadratureResult> {
    if !f.is_callable() {
        return Err(IntegrateError::NotCallable.into());
    }
    let opts = TanhSinhOptions::new(maxfun, maxiter, atol, rtol, minweight, verbose)?;
    let inner = integrate::tanhsinh(py_integrand(py, f), a, b, &opts)?;
    Ok(PyQuadratureResult { inner })
}

/// _rust_quadrature — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_quadrature` Python module and register the `integrate`
/// submodule used by the public `rust_quadrature` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_quadrature<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let integrate_mod = PyModule::new(_py, "integrate")?;
    integrate_module(_py, m, &integrate_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_quadrature.integrate", integrate_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn integrate_module<'py>(
    _py: Python, rust_quadrature: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyQuadratureResult>()?;
    m.add_function(wrap_pyfunction!(py_tanhsinh, m)?)?;
    rust_quadrature.add_submodule(m)?;
    Ok(())
}
