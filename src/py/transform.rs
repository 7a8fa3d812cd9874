//! PyO3 bindings for coordinate shifts.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::batch;
use crate::shift::gcj02;
use crate::shift::mercator::MercatorVariant;
use crate::shift::pipeline::{Pipeline, PipelineOptions};
use crate::shift::system::ReferenceSystem;
use crate::shift::Shift;

fn build_pipeline(src: &str, dst: &str, mercator: &str) -> PyResult<Pipeline> {
    let mercator = MercatorVariant::from_name(mercator).ok_or_else(|| {
        PyValueError::new_err(format!("Unknown Web Mercator variant: '{mercator}'"))
    })?;
    let from = src
        .parse::<ReferenceSystem>()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let to = dst
        .parse::<ReferenceSystem>()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Pipeline::with_options(from, to, PipelineOptions { mercator })
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Transform arrays of coordinates from one reference system to another.
///
/// Args:
///     x: 1D array of x coordinates (longitude or Web Mercator easting).
///     y: 1D array of y coordinates (latitude or Web Mercator northing).
///     src: Source system name ("wgs84", "gcj02", "bd09", "webmercator").
///     dst: Destination system name.
///     mercator: "reference" (default) or "corrected" Web Mercator constants.
///
/// Returns:
///     Tuple of (x_out, y_out) arrays in the destination system.
#[pyfunction]
#[pyo3(signature = (x, y, src, dst, mercator="reference"))]
#[allow(clippy::type_complexity)]
pub fn transform_points<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
    src: &str,
    dst: &str,
    mercator: &str,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let pipeline = build_pipeline(src, dst, mercator)?;

    let mut xs = x.as_array().to_vec();
    let mut ys = y.as_array().to_vec();

    let (xs, ys) = py.allow_threads(move || -> PyResult<(Vec<f64>, Vec<f64>)> {
        batch::transform_xy(&pipeline, &mut xs, &mut ys)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok((xs, ys))
    })?;

    Ok((
        PyArray1::from_owned_array(py, ndarray::Array1::from(xs)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(ys)),
    ))
}

/// Transform a single (x, y) pair.
#[pyfunction]
#[pyo3(signature = (x, y, src, dst, mercator="reference"))]
pub fn transform_point(
    x: f64,
    y: f64,
    src: &str,
    dst: &str,
    mercator: &str,
) -> PyResult<(f64, f64)> {
    Ok(build_pipeline(src, dst, mercator)?.apply(x, y))
}

/// Whether a lon/lat point falls outside the GCJ-02 bounding box.
#[pyfunction]
pub fn out_of_china(lon: f64, lat: f64) -> bool {
    gcj02::out_of_china(lon, lat)
}
