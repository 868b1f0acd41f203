//! Proximity queries over sessions.
//!
//! Ranking happens server-side where the true start locations are
//! already visible, so these operate on the raw coordinates, not on
//! blurred views.

use tracing::debug;

use super::types::Session;
use crate::geo::{distance_meters, Coordinate};

/// Sorts sessions in place by great-circle distance from `from` to
/// each session's true start, nearest first.
///
/// The sort is stable: equidistant sessions keep their input order.
pub fn sort_by_proximity(sessions: &mut [Session], from: Coordinate) {
    sessions.sort_by(|a, b| {
        let da = distance_meters(from, a.start);
        let db = distance_meters(from, b.start);
        da.total_cmp(&db)
    });
}

/// Returns the sessions whose true start lies within `max_meters` of
/// `from`, preserving input order.
#[must_use]
pub fn within_radius(sessions: &[Session], from: Coordinate, max_meters: f64) -> Vec<&Session> {
    let matches: Vec<&Session> = sessions
        .iter()
        .filter(|s| distance_meters(from, s.start) <= max_meters)
        .collect();
    debug!(
        total = sessions.len(),
        matched = matches.len(),
        max_meters,
        "proximity filter"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn session_at(id: &str, start: Coordinate) -> Session {
        Session::new(id, id, start, Utc::now() + Duration::hours(1))
    }

    #[test]
    fn sorts_nearest_first() {
        let here = coord(-41.28664, 174.77557);
        let mut sessions = vec![
            session_at("far", coord(-36.84846, 174.76334)),   // ~494 km
            session_at("near", coord(-41.29, 174.78)),        // ~500 m
            session_at("mid", coord(-41.10, 174.90)),         // ~23 km
        ];
        sort_by_proximity(&mut sessions, here);
        let ids: Vec<&str> = sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["near", "mid", "far"]);
    }

    #[test]
    fn sort_is_stable_for_equidistant_sessions() {
        let here = coord(0.0, 0.0);
        let same_spot = coord(1.0, 1.0);
        let mut sessions = vec![
            session_at("first", same_spot),
            session_at("second", same_spot),
        ];
        sort_by_proximity(&mut sessions, here);
        assert_eq!(sessions[0].id, "first");
        assert_eq!(sessions[1].id, "second");
    }

    #[test]
    fn within_radius_filters_and_preserves_order() {
        let here = coord(-41.28664, 174.77557);
        let sessions = vec![
            session_at("a", coord(-41.29, 174.78)),          // ~500 m
            session_at("b", coord(-36.84846, 174.76334)),    // ~494 km
            session_at("c", coord(-41.287, 174.776)),        // ~60 m
        ];
        let nearby = within_radius(&sessions, here, 1_000.0);
        let ids: Vec<&str> = nearby.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn within_radius_of_zero_matches_only_the_exact_spot() {
        let here = coord(1.0, 1.0);
        let sessions = vec![
            session_at("exact", here),
            session_at("off", coord(1.001, 1.0)),
        ];
        let nearby = within_radius(&sessions, here, 0.0);
        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].id, "exact");
    }
}
