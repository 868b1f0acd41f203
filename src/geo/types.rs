//! Geographic data types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for geographic operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Coordinate outside the valid latitude/longitude ranges, or non-finite.
    #[error("invalid coordinate: lat={lat}, lng={lng}")]
    InvalidCoordinate {
        /// Offending latitude.
        lat: f64,
        /// Offending longitude.
        lng: f64,
    },
}

/// A point on the Earth's surface.
///
/// Latitude is in `[-90, 90]`, longitude in `[-180, 180]`, both in
/// degrees. Values are plain `f64`s and the struct is `Copy`; operations
/// in this crate take coordinates by value and return new ones.
///
/// # Examples
///
/// ```
/// use stride_core::geo::Coordinate;
///
/// let wellington = Coordinate::new(-41.28664, 174.77557).unwrap();
/// assert!(wellington.is_valid());
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidCoordinate`] if either component is
    /// non-finite, latitude is outside `[-90, 90]`, or longitude is
    /// outside `[-180, 180]`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        let coord = Self { lat, lng };
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoError::InvalidCoordinate { lat, lng })
        }
    }

    /// Whether both components are finite and in range.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Blur level for hiding a session's exact meeting point.
///
/// Determines the radius of the disk within which the displayed point is
/// displaced, and the radius of the circle drawn on the map. Larger radius
/// means more privacy but a less useful approximate location.
///
/// # Radius Table
///
/// | Level        | Radius  | Use Case |
/// |--------------|---------|----------|
/// | Street       | 250 m   | Dense urban areas |
/// | Neighborhood | 500 m   | Default for public sessions |
/// | District     | 1000 m  | Maximum privacy |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BlurRadius {
    /// 250 m - dense urban areas where a small offset already hides the spot
    Street,
    /// 500 m - balanced privacy and map usefulness
    #[default]
    Neighborhood,
    /// 1000 m - maximum privacy
    District,
}

impl BlurRadius {
    /// Returns the blur radius in meters.
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::Street => 250.0,
            Self::Neighborhood => 500.0,
            Self::District => 1000.0,
        }
    }
}
