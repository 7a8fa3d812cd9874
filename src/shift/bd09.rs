//! GCJ-02 ↔ BD-09 (Baidu) polar shift.
//!
//! forward: z = sqrt(x² + y²) + 2e-5·sin(y·xπ), θ = atan2(y, x) + 3e-6·cos(x·xπ),
//!          (λ', φ') = (z·cos θ + 0.0065, z·sin θ + 0.006)
//! inverse: remove the (0.0065, 0.006) bias first, then subtract the same perturbations.
//!
//! Unlike GCJ-02, BD-09 has no bounding-box guard: the shift applies everywhere.

use super::gcj02;
use super::krasovsky::X_PI;

/// BD-09 → GCJ-02.
pub fn bd09_to_gcj02(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon - 0.0065;
    let y = lat - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    (z * theta.cos(), z * theta.sin())
}

/// GCJ-02 → BD-09.
pub fn gcj02_to_bd09(lon: f64, lat: f64) -> (f64, f64) {
    let z = (lon * lon + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lon) + 0.000003 * (lon * X_PI).cos();
    (z * theta.cos() + 0.0065, z * theta.sin() + 0.006)
}

/// WGS84 → BD-09, through GCJ-02.
pub fn wgs84_to_bd09(lon: f64, lat: f64) -> (f64, f64) {
    let (glon, glat) = gcj02::wgs84_to_gcj02(lon, lat);
    gcj02_to_bd09(glon, glat)
}

/// BD-09 → WGS84, through GCJ-02.
pub fn bd09_to_wgs84(lon: f64, lat: f64) -> (f64, f64) {
    let (glon, glat) = bd09_to_gcj02(lon, lat);
    gcj02::gcj02_to_wgs84(glon, glat)
}
