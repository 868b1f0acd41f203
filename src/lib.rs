//! Stride Core Library
//!
//! Core functionality for Stride - group running sessions with location
//! privacy. This crate owns the geometry that hides a session's exact
//! meeting point from non-subscribers: deterministic coordinate
//! displacement, route leading-segment trimming, and the map-view
//! composition the app renders from.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod geo;
pub mod route;
pub mod session;

pub use geo::{displace, distance_meters, BlurRadius, Coordinate, GeoError};
pub use route::Route;
pub use session::{LocationAccess, Session, SessionMapView};
