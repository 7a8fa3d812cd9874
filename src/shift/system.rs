use std::fmt;
use std::str::FromStr;

use crate::error::ShiftError;

/// Coordinate reference systems the shift pipeline understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceSystem {
    /// GPS datum, degrees.
    Wgs84,
    /// "Mars" coordinates, degrees.
    Gcj02,
    /// Baidu coordinates, degrees.
    Bd09,
    /// Spherical Web Mercator, metres.
    WebMercator,
}

impl ReferenceSystem {
    pub const ALL: [ReferenceSystem; 4] = [
        ReferenceSystem::Wgs84,
        ReferenceSystem::Gcj02,
        ReferenceSystem::Bd09,
        ReferenceSystem::WebMercator,
    ];

    /// Parse from a string name. Case-insensitive, accepts common aliases.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wgs84" | "wgs-84" | "epsg:4326" => Some(Self::Wgs84),
            "gcj02" | "gcj-02" | "mars" => Some(Self::Gcj02),
            "bd09" | "bd-09" | "baidu" => Some(Self::Bd09),
            "webmercator" | "web_mercator" | "mercator" | "epsg:3857" => {
                Some(Self::WebMercator)
            }
            _ => None,
        }
    }

    /// Whether coordinates are longitude/latitude degrees rather than metres.
    pub fn is_geographic(&self) -> bool {
        !matches!(self, Self::WebMercator)
    }
}

impl FromStr for ReferenceSystem {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ShiftError::UnknownSystem(s.to_string()))
    }
}

impl fmt::Display for ReferenceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wgs84 => "WGS84",
            Self::Gcj02 => "GCJ02",
            Self::Bd09 => "BD09",
            Self::WebMercator => "WEB_MERCATOR",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(ReferenceSystem::from_name("WGS84"), Some(ReferenceSystem::Wgs84));
        assert_eq!(ReferenceSystem::from_name("epsg:4326"), Some(ReferenceSystem::Wgs84));
        assert_eq!(ReferenceSystem::from_name("Mars"), Some(ReferenceSystem::Gcj02));
        assert_eq!(ReferenceSystem::from_name("gcj-02"), Some(ReferenceSystem::Gcj02));
        assert_eq!(ReferenceSystem::from_name("baidu"), Some(ReferenceSystem::Bd09));
        assert_eq!(
            ReferenceSystem::from_name(" EPSG:3857 "),
            Some(ReferenceSystem::WebMercator)
        );
        assert_eq!(ReferenceSystem::from_name("utm"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "EPSG:32633".parse::<ReferenceSystem>().unwrap_err();
        assert_eq!(err, ShiftError::UnknownSystem("EPSG:32633".into()));
    }

    #[test]
    fn test_display_parses_back() {
        for sys in ReferenceSystem::ALL {
            let parsed: ReferenceSystem = sys.to_string().parse().unwrap();
            assert_eq!(parsed, sys);
        }
    }

    #[test]
    fn test_is_geographic() {
        assert!(ReferenceSystem::Bd09.is_geographic());
        assert!(!ReferenceSystem::WebMercator.is_geographic());
    }
}
