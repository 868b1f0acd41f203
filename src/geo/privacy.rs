//! Deterministic location displacement ("blurring").
//!
//! The blurred pin for a session must stay put across page reloads and
//! across devices, so the pseudo-randomness is derived from a stable
//! seed string (the session identifier) instead of an RNG. Two unit
//! values come out of a 32-bit FNV-1a hash of the seed with a
//! murmur3-style finalizer; the hash constants are fixed, so any
//! platform computes the identical displaced point.

use std::f64::consts::PI;

use super::distance::EARTH_RADIUS_M;
use super::types::Coordinate;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// fmix32 finalizer from murmur3. Spreads sequential seeds
/// ("session-1", "session-2", ...) across the full 32-bit range.
const fn mix(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// FNV-1a over the seed bytes, finalized with [`mix`].
pub(crate) fn hash_seed(seed: &str) -> u32 {
    let mut h = FNV_OFFSET;
    for byte in seed.bytes() {
        h ^= u32::from(byte);
        h = h.wrapping_mul(FNV_PRIME);
    }
    mix(h)
}

/// Normalizes a 32-bit hash to `[0, 1)`.
fn unit(h: u32) -> f64 {
    f64::from(h) / (f64::from(u32::MAX) + 1.0)
}

fn wrap_lng(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Displaces a coordinate to a deterministic pseudo-random point within
/// `radius_meters` of the input.
///
/// The point is uniform in area over the blur disk: the distance from
/// the center is sampled as `radius * sqrt(u)`, not `radius * u`, so
/// blurred pins do not bunch up around the true location. Longitude
/// displacement is scaled by `cos(latitude)` to keep the disk round
/// away from the equator.
///
/// Identical `(coord, radius_meters, seed)` always produce the
/// identical output. Degenerate inputs (zero, negative or non-finite
/// radius, non-finite coordinate) return the input unchanged.
///
/// # Examples
///
/// ```
/// use stride_core::geo::{displace, distance_meters, Coordinate};
///
/// let start = Coordinate::new(-41.28664, 174.77557).unwrap();
/// let blurred = displace(start, 1000.0, "session-42");
///
/// assert!(distance_meters(start, blurred) <= 1000.0);
/// assert_eq!(blurred, displace(start, 1000.0, "session-42"));
/// ```
#[must_use]
pub fn displace(coord: Coordinate, radius_meters: f64, seed: &str) -> Coordinate {
    if !radius_meters.is_finite()
        || radius_meters <= 0.0
        || !coord.lat.is_finite()
        || !coord.lng.is_finite()
    {
        return coord;
    }

    let h1 = hash_seed(seed);
    let h2 = mix(h1.wrapping_add(0x9e37_79b9));

    let angle = 2.0 * PI * unit(h1);
    let dist = radius_meters * unit(h2).sqrt();

    let d_lat = (dist * angle.sin() / EARTH_RADIUS_M).to_degrees();
    // cos(lat) goes to zero at the poles; floor it so longitude stays finite
    let lng_scale = coord.lat.to_radians().cos().max(1e-6);
    let d_lng = (dist * angle.cos() / (EARTH_RADIUS_M * lng_scale)).to_degrees();

    Coordinate {
        lat: (coord.lat + d_lat).clamp(-90.0, 90.0),
        lng: wrap_lng(coord.lng + d_lng),
    }
}
