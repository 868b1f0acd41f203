//! Running sessions and what the map renders for them.
//!
//! A session carries its true start/end locations and an encoded route.
//! Nothing outside the trusted boundary sees those directly: the app
//! asks for a [`SessionMapView`] with the viewer's [`LocationAccess`],
//! and the blurred variant is produced by deterministic displacement
//! and route trimming keyed on the session id.
//!
//! # Example Usage
//!
//! ```
//! use chrono::{Duration, Utc};
//! use stride_core::geo::{BlurRadius, Coordinate};
//! use stride_core::session::{LocationAccess, Session};
//!
//! let session = Session::new(
//!     "session-42",
//!     "Sunrise harbour loop",
//!     Coordinate::new(-41.28664, 174.77557).unwrap(),
//!     Utc::now() + Duration::hours(12),
//! );
//!
//! let public = session.map_view(LocationAccess::Blurred);
//! assert!(public.blur_radius_meters.is_some());
//! assert_ne!(public.start, session.start);
//!
//! let subscriber = session.map_view(LocationAccess::Exact);
//! assert_eq!(subscriber.start, session.start);
//! ```

pub mod query;
pub mod types;

pub use query::{sort_by_proximity, within_radius};
pub use types::{LocationAccess, Session, SessionMapView};
