use pyo3::prelude::*;

mod transform;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform::transform_points, m)?)?;
    m.add_function(wrap_pyfunction!(transform::transform_point, m)?)?;
    m.add_function(wrap_pyfunction!(transform::out_of_china, m)?)?;
    Ok(())
}
