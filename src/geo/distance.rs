//! Great-circle distance between coordinates.
//!
//! Haversine on a spherical Earth. Good to roughly 0.5% against the
//! ellipsoid, which is plenty for blur radii, trim distances and
//! "sessions near me" ranking.

use super::types::Coordinate;

/// Earth radius in meters (spherical approximation).
pub(crate) const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters.
///
/// Symmetric up to floating-point rounding, and zero for identical
/// points. Pure function; requires valid coordinates.
///
/// # Examples
///
/// ```
/// use stride_core::geo::{distance_meters, Coordinate};
///
/// let wellington = Coordinate::new(-41.28664, 174.77557).unwrap();
/// let auckland = Coordinate::new(-36.84846, 174.76334).unwrap();
///
/// let d = distance_meters(wellington, auckland);
/// assert!((d - 493_000.0).abs() < 3_000.0);
/// ```
#[must_use]
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_M * c
}
