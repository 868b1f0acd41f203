//! Leading-segment trim.
//!
//! Removes the first `meters` of a route so the drawn line no longer
//! starts at the true meeting point. Operates at point granularity:
//! whole points are dropped, no point is synthesized at the exact
//! boundary distance. Callers needing a tighter cut should densify
//! their source geometry instead.

use super::types::Route;
use crate::geo::distance_meters;

/// Returns the suffix of `route` that remains after removing the
/// leading segment whose cumulative great-circle length is below
/// `meters`.
///
/// - Fewer than two points, or `meters <= 0`: the route is returned
///   unchanged.
/// - Total length shorter than `meters`: a single-point route holding
///   only the last point, so a caller always has something to render.
///
/// The output is always a contiguous suffix of the input in original
/// order; never empty for a non-empty input.
///
/// # Examples
///
/// ```
/// use stride_core::geo::Coordinate;
/// use stride_core::route::{trim_start, Route};
///
/// // Three points spaced one degree of latitude (~111 km) apart
/// let route = Route::new(vec![
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(1.0, 0.0).unwrap(),
///     Coordinate::new(2.0, 0.0).unwrap(),
/// ]);
///
/// let trimmed = trim_start(&route, 100_000.0);
/// assert_eq!(trimmed.points(), &route.points()[1..]);
/// ```
#[must_use]
pub fn trim_start(route: &Route, meters: f64) -> Route {
    let points = route.points();
    if points.len() < 2 || meters <= 0.0 {
        return route.clone();
    }

    let mut walked = 0.0;
    for i in 1..points.len() {
        walked += distance_meters(points[i - 1], points[i]);
        if walked >= meters {
            return Route::new(points[i..].to_vec());
        }
    }

    // The whole route is shorter than the trim distance; keep the end
    // point so the caller still has a pin to draw.
    match points.last() {
        Some(&last) => Route::new(vec![last]),
        None => route.clone(),
    }
}
