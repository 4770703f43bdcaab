use crate::core::geo::GeoPoint;
use std::f64::consts::PI;

/// Rotation constant of the empirical GCJ-02 to BD-09 correction.
const X_PI: f64 = PI * 3000.0 / 180.0;

/// Coordinate reference system definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// GCJ-02, the obfuscated datum used by AMap/Gaode tiles
    Gcj02,
    /// BD-09, the Baidu Maps datum
    Bd09,
}

/// Converts a GCJ-02 coordinate pair to its approximate BD-09 equivalent.
///
/// This is the fixed empirical correction both ecosystems agree on, not a
/// survey-grade transform. The constants are contract values: downstream map
/// rendering expects exactly this approximation, so the formula must stay
/// bit-for-bit as written.
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng;
    let y = lat;
    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();
    let bd_lng = z * theta.cos() + 0.0065;
    let bd_lat = z * theta.sin() + 0.006;
    (bd_lng, bd_lat)
}

/// Coordinate conversion facade over the pairwise transforms the dashboard
/// actually uses.
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Self
    }

    /// Converts a point between coordinate systems
    pub fn convert(
        &self,
        point: GeoPoint,
        from: CoordinateSystem,
        to: CoordinateSystem,
    ) -> Result<GeoPoint, ConversionError> {
        match (from, to) {
            (CoordinateSystem::Gcj02, CoordinateSystem::Bd09) => {
                let (lng, lat) = gcj02_to_bd09(point.lng, point.lat);
                Ok(GeoPoint::new(lng, lat))
            }
            _ => Err(ConversionError::UnsupportedTransformation),
        }
    }

    /// Converts a batch of points
    pub fn convert_batch(
        &self,
        points: &[GeoPoint],
        from: CoordinateSystem,
        to: CoordinateSystem,
    ) -> Result<Vec<GeoPoint>, ConversionError> {
        points.iter().map(|p| self.convert(*p, from, to)).collect()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during coordinate conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Unsupported coordinate transformation")]
    UnsupportedTransformation,
}
