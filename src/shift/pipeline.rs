//! Pipeline: picks the conversion function (or two-hop composition) for a
//! (source, target) pair and applies it to points.

use log::debug;

use crate::error::ShiftError;
use crate::shift::mercator::MercatorVariant;
use crate::shift::system::ReferenceSystem;
use crate::shift::{bd09, gcj02, Shift};

/// Options that tune how a pipeline is assembled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Scale constants for the Web Mercator legs.
    pub mercator: MercatorVariant,
}

/// The concrete conversion a pipeline runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Identity,
    Wgs84ToGcj02,
    Gcj02ToWgs84,
    Gcj02ToBd09,
    Bd09ToGcj02,
    /// WGS84 → GCJ-02 → BD-09
    Wgs84ToBd09,
    /// BD-09 → GCJ-02 → WGS84
    Bd09ToWgs84,
    Wgs84ToWebMercator(MercatorVariant),
    WebMercatorToWgs84(MercatorVariant),
}

/// A (source, target) conversion resolved up front.
///
/// Construction is the only fallible step: pairs with no defined path are rejected
/// here so that applying the pipeline never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pipeline {
    from: ReferenceSystem,
    to: ReferenceSystem,
    step: Step,
}

impl Pipeline {
    /// Create a pipeline with default options.
    pub fn new(from: ReferenceSystem, to: ReferenceSystem) -> Result<Self, ShiftError> {
        Self::with_options(from, to, PipelineOptions::default())
    }

    pub fn with_options(
        from: ReferenceSystem,
        to: ReferenceSystem,
        options: PipelineOptions,
    ) -> Result<Self, ShiftError> {
        use crate::shift::system::ReferenceSystem::*;

        let step = match (from, to) {
            _ if from == to => Step::Identity,
            (Wgs84, Gcj02) => Step::Wgs84ToGcj02,
            (Gcj02, Wgs84) => Step::Gcj02ToWgs84,
            (Gcj02, Bd09) => Step::Gcj02ToBd09,
            (Bd09, Gcj02) => Step::Bd09ToGcj02,
            (Wgs84, Bd09) => Step::Wgs84ToBd09,
            (Bd09, Wgs84) => Step::Bd09ToWgs84,
            (Wgs84, WebMercator) => Step::Wgs84ToWebMercator(options.mercator),
            (WebMercator, Wgs84) => Step::WebMercatorToWgs84(options.mercator),
            _ => {
                debug!("no conversion path for {from} -> {to}");
                return Err(ShiftError::UnsupportedConversion { from, to });
            }
        };
        debug!("pipeline {from} -> {to} resolved to {step:?}");
        Ok(Self { from, to, step })
    }

    /// Parse both endpoints by name and build a pipeline.
    pub fn from_names(from: &str, to: &str) -> Result<Self, ShiftError> {
        Self::new(from.parse()?, to.parse()?)
    }

    /// Whether `from` → `to` has a defined path.
    pub fn is_supported(from: ReferenceSystem, to: ReferenceSystem) -> bool {
        Self::new(from, to).is_ok()
    }

    pub fn is_identity(&self) -> bool {
        self.step == Step::Identity
    }
}

impl Shift for Pipeline {
    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        match self.step {
            Step::Identity => (x, y),
            Step::Wgs84ToGcj02 => gcj02::wgs84_to_gcj02(x, y),
            Step::Gcj02ToWgs84 => gcj02::gcj02_to_wgs84(x, y),
            Step::Gcj02ToBd09 => bd09::gcj02_to_bd09(x, y),
            Step::Bd09ToGcj02 => bd09::bd09_to_gcj02(x, y),
            Step::Wgs84ToBd09 => bd09::wgs84_to_bd09(x, y),
            Step::Bd09ToWgs84 => bd09::bd09_to_wgs84(x, y),
            Step::Wgs84ToWebMercator(variant) => variant.forward(x, y),
            Step::WebMercatorToWgs84(variant) => variant.inverse(x, y),
        }
    }

    fn source(&self) -> ReferenceSystem {
        self.from
    }

    fn target(&self) -> ReferenceSystem {
        self.to
    }
}

/// Convert a single point from `from` to `to`.
pub fn transform(
    lon: f64,
    lat: f64,
    from: ReferenceSystem,
    to: ReferenceSystem,
) -> Result<(f64, f64), ShiftError> {
    Ok(Pipeline::new(from, to)?.apply(lon, lat))
}
