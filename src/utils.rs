//! utils — PyO3 conversion helpers for the Python bindings.
//!
//! Converts Python array-likes into contiguous `f64` arrays and wraps a
//! Python callable as a batched integrand for `integrate::tanhsinh`.

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::integrate::errors::{IntegrateError, IntegrateResult};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
    ToPyArray, // &Array1 → PyArray
};

/// Accept a 1-D `numpy.ndarray`, `pandas.Series` or sequence of floats as a
/// read-only contiguous `float64` array.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Wrap a Python callable `f(x: ndarray) -> array-like` as a batched
/// integrand.
///
/// Each batch is passed as a fresh 1-D NumPy array. Python exceptions and
/// unusable return values become [`IntegrateError::IntegrandFailed`]; a
/// return value of the wrong length is left for the engine's shape check.
#[cfg(feature = "python-bindings")]
pub fn py_integrand<'py>(
    py: Python<'py>, f: &Bound<'py, PyAny>,
) -> impl Fn(&Array1<f64>) -> IntegrateResult<Array1<f64>> + 'py {
    let f = f.clone();
    move |x: &Array1<f64>| -> IntegrateResult<Array1<f64>> {
        let failed = |err: PyErr| IntegrateError::IntegrandFailed { reason: err.to_string() };

        let out = f.call1((x.to_pyarray(py),)).map_err(failed)?;
        let values = extract_f64_array(py, &out).map_err(failed)?;
        Ok(values.as_array().to_owned())
    }
}
