//! Route geometries for Stride sessions.
//!
//! A route is an ordered coordinate sequence decoded from the compact
//! polyline encoding. Decoding happens once at the boundary (this
//! module delegates to the `polyline` crate); everything downstream
//! works on decoded points. [`trim_start`] removes the leading segment
//! of a route so a viewer cannot infer the true start point from where
//! the drawn line begins.

pub mod codec;
pub mod error;
pub mod trim;
pub mod types;

pub use codec::{decode, decode_or_empty, encode};
pub use error::RouteError;
pub use trim::trim_start;
pub use types::Route;
