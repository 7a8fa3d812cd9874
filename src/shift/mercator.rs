//! WGS84 ↔ spherical Web Mercator in the degree-scaled form.
//!
//!   forward: x = λ·S_x/180, y = ln(tan((90 + φ)·π/360))/(π/180)·S_y/180
//!   inverse: λ = x/S·180,   φ = 180/π·(2·atan(exp(y/S·180·π/180)) - π/2)
//!
//! The reference forward path uses S_x = 20037508.342789 but S_y = 20037508.34789,
//! and the inverse uses S = 20037508.34 on both axes. Those constants are kept
//! as-is so results agree with existing data. The `_corrected` functions use
//! the half-circumference 20037508.342789 everywhere.

use std::f64::consts::PI;

/// Half the equatorial circumference of the EPSG:3857 sphere (metres).
pub const HALF_CIRCUMFERENCE: f64 = 20_037_508.342_789;

const REFERENCE_SCALE_Y: f64 = 20_037_508.347_89;
const REFERENCE_SCALE_INV: f64 = 20_037_508.34;

/// Which set of scale constants to use for Web Mercator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MercatorVariant {
    /// Constants as found in existing datasets (asymmetric x/y scale).
    #[default]
    Reference,
    /// One consistent scale on both axes in both directions.
    Corrected,
}

impl MercatorVariant {
    /// Parse from a string name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reference" => Some(Self::Reference),
            "corrected" => Some(Self::Corrected),
            _ => None,
        }
    }

    pub fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        match self {
            Self::Reference => wgs84_to_web_mercator(lon, lat),
            Self::Corrected => wgs84_to_web_mercator_corrected(lon, lat),
        }
    }

    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Self::Reference => web_mercator_to_wgs84(x, y),
            Self::Corrected => web_mercator_to_wgs84_corrected(x, y),
        }
    }
}

fn mercator_y_degrees(lat: f64) -> f64 {
    ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0)
}

fn inverse_with_scale(x: f64, y: f64, scale: f64) -> (f64, f64) {
    let lon = x / scale * 180.0;
    let y = y / scale * 180.0;
    let lat = 180.0 / PI * (2.0 * (y * PI / 180.0).exp().atan() - PI / 2.0);
    (lon, lat)
}

/// WGS84 degrees → Web Mercator metres, reference constants.
pub fn wgs84_to_web_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon * HALF_CIRCUMFERENCE / 180.0;
    let y = mercator_y_degrees(lat) * REFERENCE_SCALE_Y / 180.0;
    (x, y)
}

/// Web Mercator metres → WGS84 degrees, reference constants.
pub fn web_mercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    inverse_with_scale(x, y, REFERENCE_SCALE_INV)
}

/// WGS84 degrees → Web Mercator metres with the same scale on both axes.
pub fn wgs84_to_web_mercator_corrected(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon * HALF_CIRCUMFERENCE / 180.0;
    let y = mercator_y_degrees(lat) * HALF_CIRCUMFERENCE / 180.0;
    (x, y)
}

/// Web Mercator metres → WGS84 degrees, exact inverse of the corrected forward.
pub fn web_mercator_to_wgs84_corrected(x: f64, y: f64) -> (f64, f64) {
    inverse_with_scale(x, y, HALF_CIRCUMFERENCE)
}
