//! Datum constants shared by the GCJ-02 and BD-09 shift models.
//!
//! The GCJ-02 offset is scaled on the Krasovsky 1940 ellipsoid, not on WGS84.

use std::f64::consts::PI;

/// Angular factor used by the BD-09 polar shift: π·3000/180.
pub const X_PI: f64 = PI * 3000.0 / 180.0;

/// Krasovsky semi-major axis (metres).
pub const A: f64 = 6_378_245.0;

/// Krasovsky first eccentricity squared.
#[allow(clippy::excessive_precision)]
pub const EE: f64 = 0.00669342162296594323;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_x_pi() {
        assert_relative_eq!(X_PI, 52.359_877_559_829_88, epsilon = 1e-12);
    }

    #[test]
    fn test_krasovsky_constants() {
        assert_relative_eq!(A, 6_378_245.0);
        // Krasovsky flattening is 1/298.3, so e² = 2f - f²
        let f = 1.0 / 298.3;
        assert_relative_eq!(EE, 2.0 * f - f * f, epsilon = 1e-12);
    }
}
