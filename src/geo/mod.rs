//! Geographic primitives for Stride.
//!
//! Provides the coordinate type shared across the crate, great-circle
//! distance, and deterministic location displacement:
//! - Coordinate validation (finite, in-range latitude/longitude)
//! - Haversine distance on a spherical Earth
//! - Seeded displacement of a point within a blur radius
//!
//! # Privacy Guarantees
//!
//! - Displacement is a pure function of `(coordinate, radius, seed)`;
//!   the same session always blurs to the same point, so pins never
//!   jump between renders or between devices
//! - No RNG and no clock is consulted anywhere in this module
//! - Displaced points are uniform in area over the blur disk, so the
//!   density of blurred pins leaks nothing about the true center
//!
//! # Example Usage
//!
//! ```
//! use stride_core::geo::{displace, distance_meters, Coordinate};
//!
//! let start = Coordinate::new(-41.28664, 174.77557).unwrap();
//!
//! // Blur the meeting point within 1km, keyed on the session id
//! let blurred = displace(start, 1000.0, "session-42_start");
//! assert!(distance_meters(start, blurred) <= 1000.0);
//!
//! // Repeated calls return the identical point
//! assert_eq!(blurred, displace(start, 1000.0, "session-42_start"));
//! ```

pub mod distance;
pub mod privacy;
pub mod types;

pub use distance::distance_meters;
pub use privacy::displace;
pub use types::{BlurRadius, Coordinate, GeoError};
