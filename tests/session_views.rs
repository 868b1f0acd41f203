//! End-to-end map-view scenarios.
//!
//! These walk the full path a page render takes: session in, map view
//! out, for both subscriber and non-subscriber access.

use chrono::{Duration, Utc};
use stride_core::geo::{distance_meters, BlurRadius, Coordinate};
use stride_core::route::{encode, trim_start, Route};
use stride_core::session::{sort_by_proximity, LocationAccess, Session};

fn wellington() -> Coordinate {
    Coordinate::new(-41.28664, 174.77557).unwrap()
}

/// Five points heading north from the waterfront, ~200m apart.
fn harbour_route() -> Route {
    let step = 0.001_798_6;
    Route::new(
        (0..5)
            .map(|i| Coordinate::new(-41.28664 + f64::from(i) * step, 174.77557).unwrap())
            .collect(),
    )
}

fn harbour_session() -> Session {
    Session::new(
        "session-42",
        "Sunrise harbour loop",
        wellington(),
        Utc::now() + Duration::hours(12),
    )
    .with_blur(BlurRadius::District)
    .with_route(encode(&harbour_route()).unwrap())
}

#[test]
fn blurred_pin_lies_within_the_radius_and_is_stable() {
    let session = harbour_session();

    let first = session.map_view(LocationAccess::Blurred);
    let second = session.map_view(LocationAccess::Blurred);
    assert_eq!(first, second, "independent renders must agree");

    let d = distance_meters(wellington(), first.start);
    assert!(d <= 1000.5, "blurred pin {d}m outside the 1000m radius");
    assert!(d > 0.0);
}

#[test]
fn trimmed_route_hides_the_leading_segment() {
    let route = harbour_route(); // ~800m total
    let trimmed = trim_start(&route, 300.0);

    // The second segment crosses 300m, so two points are dropped.
    assert_eq!(trimmed.points(), &route.points()[2..]);

    // Whatever remains is under 500m of the original end.
    assert!(trimmed.total_length_meters() <= 500.0);
}

#[test]
fn route_shorter_than_the_trim_collapses_to_its_end() {
    // ~50m total, trimmed by 300m
    let short = Route::new(vec![
        Coordinate::new(-41.28664, 174.77557).unwrap(),
        Coordinate::new(-41.28619, 174.77557).unwrap(),
    ]);
    let trimmed = trim_start(&short, 300.0);
    assert_eq!(trimmed.points(), &short.points()[1..]);
}

#[test]
fn blurred_view_trims_the_rendered_route() {
    let session = harbour_session();
    let view = session.map_view(LocationAccess::Blurred);

    // 1000m blur over an ~800m route leaves only the final point.
    assert_eq!(view.route.len(), 1);

    // Codec precision is 1e-5 degrees, so compare by distance.
    let original_end = *harbour_route().points().last().unwrap();
    assert!(distance_meters(view.route.points()[0], original_end) < 2.0);
}

#[test]
fn exact_view_renders_the_full_route() {
    let session = harbour_session();
    let view = session.map_view(LocationAccess::Exact);

    assert_eq!(view.start, wellington());
    assert_eq!(view.route.len(), 5);
    assert_eq!(view.blur_radius_meters, None);
}

#[test]
fn nearby_listing_ranks_by_true_distance() {
    let here = wellington();
    let mut sessions = vec![
        Session::new("auckland", "Domain loop", Coordinate::new(-36.84846, 174.76334).unwrap(), Utc::now() + Duration::hours(2)),
        harbour_session(),
    ];
    sort_by_proximity(&mut sessions, here);
    assert_eq!(sessions[0].id, "session-42");
    assert_eq!(sessions[1].id, "auckland");
}
