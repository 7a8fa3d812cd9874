use thiserror::Error;

use crate::shift::system::ReferenceSystem;

#[derive(Error, Debug, PartialEq)]
pub enum ShiftError {
    #[error("Unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        from: ReferenceSystem,
        to: ReferenceSystem,
    },

    #[error("Unknown reference system: {0}")]
    UnknownSystem(String),

    #[error("Invalid shape: {0}")]
    Shape(String),
}
