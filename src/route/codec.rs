//! Polyline codec boundary.
//!
//! Routes are stored and transmitted in the compact polyline encoding
//! (Google's algorithm, precision 5). Encoding and decoding are
//! delegated to the `polyline` crate; this module only translates
//! between its `geo-types` shapes and [`Route`].

use geo_types::{coord, LineString};

use super::error::{Result, RouteError};
use super::types::Route;
use crate::geo::Coordinate;

/// Precision used by the Google polyline format (5 decimal places).
const POLYLINE_PRECISION: u32 = 5;

/// Decodes a polyline string into a [`Route`].
///
/// # Errors
///
/// Returns [`RouteError::Decode`] when the string is not valid
/// polyline data. Rendering callers should prefer [`decode_or_empty`].
pub fn decode(encoded: &str) -> Result<Route> {
    let line: LineString<f64> = polyline::decode_polyline(encoded, POLYLINE_PRECISION)
        .map_err(|e| RouteError::Decode(e.to_string()))?;
    let points = line
        .into_iter()
        .map(|c| Coordinate { lat: c.y, lng: c.x })
        .collect();
    Ok(Route::new(points))
}

/// Decodes a polyline string, returning an empty route on failure.
///
/// A map renderer must always have something (possibly nothing) to
/// draw; a malformed stored route must not take the page down with it.
#[must_use]
pub fn decode_or_empty(encoded: &str) -> Route {
    decode(encoded).unwrap_or_else(|err| {
        tracing::debug!(%err, "discarding malformed route polyline");
        Route::empty()
    })
}

/// Encodes a [`Route`] back into a polyline string.
///
/// # Errors
///
/// Returns [`RouteError::Encode`] when a coordinate is outside the
/// encodable range.
pub fn encode(route: &Route) -> Result<String> {
    let coords = route
        .points()
        .iter()
        .map(|c| coord! { x: c.lng, y: c.lat });
    polyline::encode_coordinates(coords, POLYLINE_PRECISION)
        .map_err(|e| RouteError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Google's reference polyline for the encoding.
    const GOOGLE_EXAMPLE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    #[test]
    fn decode_reference_polyline() {
        let route = decode(GOOGLE_EXAMPLE).unwrap();
        let points = route.points();
        assert_eq!(points.len(), 3);
        assert!((points[0].lat - 38.5).abs() < 1e-9);
        assert!((points[0].lng - -120.2).abs() < 1e-9);
        assert!((points[2].lat - 43.252).abs() < 1e-9);
        assert!((points[2].lng - -126.453).abs() < 1e-9);
    }

    #[test]
    fn decode_empty_string_is_empty_route() {
        let route = decode("").unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn encode_then_decode_preserves_points() {
        let route = decode(GOOGLE_EXAMPLE).unwrap();
        let encoded = encode(&route).unwrap();
        assert_eq!(encoded, GOOGLE_EXAMPLE);
    }

    #[test]
    fn decode_or_empty_swallows_garbage() {
        // Control characters are below the polyline alphabet's range
        let route = decode_or_empty("\u{1}\u{2}garbage");
        assert!(route.is_empty());
    }

    #[test]
    fn decode_or_empty_passes_valid_input_through() {
        let route = decode_or_empty(GOOGLE_EXAMPLE);
        assert_eq!(route.len(), 3);
    }
}
