//! WGS84 ↔ GCJ-02 ("Mars" coordinates).
//!
//! The forward shift evaluates an empirical polynomial-plus-harmonic series at
//! (λ - 105°, φ - 35°) and converts the raw offset from metres to degrees on the
//! Krasovsky ellipsoid:
//!   Δφ = Δφ_raw·180 / (a(1-e²)/(W³)·π),   Δλ = Δλ_raw·180 / (a/W·cos φ·π)
//! where W = sqrt(1 - e²·sin²φ).
//!
//! The reverse direction is the usual one-step reflection, not an exact inverse.
//! Operand order inside the series matters for bit-level agreement with other
//! implementations of the same model; do not reassociate.

use std::f64::consts::PI;

use super::krasovsky::{A, EE};

/// Empirical latitude series. `x`, `y` are longitude/latitude relative to (105°, 35°).
pub fn transform_latitude(x: f64, y: f64) -> f64 {
    let mut ret =
        -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Empirical longitude series. `x`, `y` are longitude/latitude relative to (105°, 35°).
pub fn transform_longitude(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Rough mainland-China bounding box test, exclusive on all four edges.
///
/// This misclassifies some coastal and border points; callers relying on the
/// shift near the box edges should expect that.
pub fn out_of_china(lon: f64, lat: f64) -> bool {
    !(lon > 73.66 && lon < 135.05 && lat > 3.86 && lat < 53.55)
}

/// Forward GCJ-02 offset (Δλ, Δφ) in degrees at the given point.
pub fn offset(lon: f64, lat: f64) -> (f64, f64) {
    let dlat = transform_latitude(lon - 105.0, lat - 35.0);
    let dlon = transform_longitude(lon - 105.0, lat - 35.0);
    let radlat = lat / 180.0 * PI;
    let magic = radlat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();
    let dlat = (dlat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    let dlon = (dlon * 180.0) / (A / sqrt_magic * radlat.cos() * PI);
    (dlon, dlat)
}

/// WGS84 → GCJ-02. Points outside the China box pass through unchanged.
pub fn wgs84_to_gcj02(lon: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lon, lat) {
        return (lon, lat);
    }
    let (dlon, dlat) = offset(lon, lat);
    (lon + dlon, lat + dlat)
}

/// GCJ-02 → WGS84 by reflecting the forward-shifted point through the input.
///
/// The offset is evaluated at the GCJ-02 point itself, so the result carries a
/// residual of up to ~1e-4° against the true inverse.
pub fn gcj02_to_wgs84(lon: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lon, lat) {
        return (lon, lat);
    }
    let (dlon, dlat) = offset(lon, lat);
    let mg_lon = lon + dlon;
    let mg_lat = lat + dlat;
    (lon * 2.0 - mg_lon, lat * 2.0 - mg_lat)
}
