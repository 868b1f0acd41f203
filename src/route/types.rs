//! Route representation as a decoded coordinate sequence.

use serde::{Deserialize, Serialize};

use crate::geo::{distance_meters, Coordinate};

/// An ordered sequence of coordinates tracing a session's course.
///
/// Order is significant (it is a route, not a set). Routes are never
/// mutated in place; trimming produces a new `Route`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    /// Creates a route from decoded coordinate points.
    #[must_use]
    pub const fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// An empty route, used when decoding fails on the rendering path.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns a reference to the coordinate points.
    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the route and returns the owned coordinate points.
    #[must_use]
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Number of points in the route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the route has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total great-circle length of the route in meters.
    ///
    /// Zero for routes with fewer than two points.
    #[must_use]
    pub fn total_length_meters(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance_meters(pair[0], pair[1]))
            .sum()
    }
}
