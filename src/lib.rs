pub mod batch;
pub mod error;
pub mod geom;
pub mod shift;

#[cfg(feature = "python")]
mod py;

pub use error::ShiftError;
pub use shift::pipeline::{transform, Pipeline, PipelineOptions};
pub use shift::system::ReferenceSystem;
pub use shift::Shift;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
