//! Tokyo Datum to WGS84 conversion.
//!
//! Fixed empirical affine approximation of the datum shift around Japan.
//! Not a general geodetic transform; the coefficients must stay literal.

use crate::types::PoiRecord;

/// A coordinate in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wgs84Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Convert a Tokyo Datum coordinate to WGS84.
///
/// # Examples
/// ```
/// use gpoi_converter::datum::tokyo_to_wgs84;
///
/// let wgs = tokyo_to_wgs84(35.0, 135.0);
/// assert!((wgs.lat - 35.003216).abs() < 1e-6);
/// assert!((wgs.lon - 134.997218).abs() < 1e-6);
/// ```
#[must_use]
pub fn tokyo_to_wgs84(lat: f64, lon: f64) -> Wgs84Coordinate {
    Wgs84Coordinate {
        lat: lat - 0.000_106_95 * lat + 0.000_017_464 * lon + 0.004_601_7,
        lon: lon - 0.000_046_038 * lat - 0.000_083_043 * lon + 0.010_040,
    }
}

impl PoiRecord {
    /// Position of this record converted to WGS84.
    #[must_use]
    pub fn to_wgs84(&self) -> Wgs84Coordinate {
        tokyo_to_wgs84(self.lat, self.lon)
    }
}
