use serde::{Deserialize, Serialize};

/// A geographical coordinate as the dashboard's backend delivers it:
/// longitude first, latitude second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a new GeoPoint coordinate
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && self.lng >= -180.0
            && self.lng <= 180.0
            && self.lat >= -90.0
            && self.lat <= 90.0
    }

    /// Display text for a single coordinate component. Devices with missing
    /// position data carry non-finite components; those render as blanks
    /// rather than an error.
    pub fn coord_text(value: f64) -> String {
        if value.is_finite() {
            value.to_string()
        } else {
            String::new()
        }
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A point in screen pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for ScreenPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_creation() {
        let point = GeoPoint::new(116.403847, 39.915526);
        assert_eq!(point.lng, 116.403847);
        assert_eq!(point.lat, 39.915526);
        assert!(point.is_valid());
    }

    #[test]
    fn test_geo_point_validity() {
        assert!(!GeoPoint::new(181.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 91.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_coord_text_blanks_non_finite() {
        assert_eq!(GeoPoint::coord_text(116.4), "116.4");
        assert_eq!(GeoPoint::coord_text(f64::NAN), "");
        assert_eq!(GeoPoint::coord_text(f64::INFINITY), "");
    }
}
