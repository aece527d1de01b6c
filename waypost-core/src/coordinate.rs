//! Geographic coordinates in decimal degrees.

use geo::{Coord, Point};
use thiserror::Error;

/// Smallest and largest valid latitude in decimal degrees.
const LATITUDE_LIMIT: f64 = 90.0;
/// Smallest and largest valid longitude in decimal degrees.
const LONGITUDE_LIMIT: f64 = 180.0;

/// A `(latitude, longitude)` pair in decimal degrees.
///
/// Construction is unchecked so the distance and sequencing functions stay
/// total over whatever the caller supplies. Call [`Coordinate::validate`] at
/// the boundary where input enters the system.
///
/// Converting to [`geo::Coord`] follows the WGS84 convention used by `geo`:
/// `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use waypost_core::Coordinate;
///
/// let depot = Coordinate::new(0.3476, 32.5825);
/// assert!(depot.validate().is_ok());
/// assert!(Coordinate::new(91.0, 0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in decimal degrees, positive north.
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east.
    pub longitude: f64,
}

/// Reasons a [`Coordinate`] fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was `NaN` or infinite.
    #[error("coordinate components must be finite, got ({latitude}, {longitude})")]
    NonFinite {
        /// Offending latitude.
        latitude: f64,
        /// Offending longitude.
        longitude: f64,
    },
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Construct a coordinate without validating it.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both components are finite and within range.
    ///
    /// # Errors
    /// Returns the first violated constraint, checking finiteness before
    /// range.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(CoordinateError::NonFinite {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if !(-LATITUDE_LIMIT..=LATITUDE_LIMIT).contains(&self.latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(self.latitude));
        }
        if !(-LONGITUDE_LIMIT..=LONGITUDE_LIMIT).contains(&self.longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    /// Return `true` when [`Coordinate::validate`] would succeed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self::from(Coord::from(value))
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(value: Point<f64>) -> Self {
        Self::from(value.0)
    }
}
