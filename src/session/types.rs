//! Session data types and map-view composition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::{displace, BlurRadius, Coordinate};
use crate::route::{decode_or_empty, trim_start, Route};

/// What a viewer is entitled to see of a session's location.
///
/// Entitlements (subscription state) live in the backend; this crate
/// only applies the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationAccess {
    /// Subscriber: exact meeting point and full route.
    Exact,
    /// Everyone else: displaced point, blur circle, trimmed route.
    Blurred,
}

/// A scheduled group-running session.
///
/// `start` and `end` are the true locations as entered by the host;
/// they must never be handed to an untrusted viewer directly. Use
/// [`Session::map_view`] to produce what a given viewer may see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Stable identifier; also the displacement seed for this session.
    pub id: String,

    /// Host-supplied title.
    pub title: String,

    /// True meeting point.
    pub start: Coordinate,

    /// True finish point, if different from the start.
    pub end: Option<Coordinate>,

    /// Traced course as an encoded polyline, if the host drew one.
    pub route: Option<String>,

    /// Scheduled start time (UTC).
    pub starts_at: DateTime<Utc>,

    /// Blur level applied for non-subscribers.
    pub blur: BlurRadius,
}

impl Session {
    /// Creates a session with the default blur level and no route.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: Coordinate,
        starts_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end: None,
            route: None,
            starts_at,
            blur: BlurRadius::default(),
        }
    }

    /// Sets the finish point.
    #[must_use]
    pub fn with_end(mut self, end: Coordinate) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the encoded route polyline.
    #[must_use]
    pub fn with_route(mut self, encoded: impl Into<String>) -> Self {
        self.route = Some(encoded.into());
        self
    }

    /// Sets the blur level.
    #[must_use]
    pub const fn with_blur(mut self, blur: BlurRadius) -> Self {
        self.blur = blur;
        self
    }

    /// Whether the session is still in the future.
    #[must_use]
    pub fn is_upcoming(&self) -> bool {
        self.starts_at > Utc::now()
    }

    /// Produces the map view a viewer with the given access may see.
    ///
    /// `Exact` passes the true locations and full route through.
    /// `Blurred` displaces the start and end within the session's blur
    /// radius (seeded on `"<id>_start"` / `"<id>_end"`), trims the
    /// route's leading segment by the same radius, and reports the
    /// radius so the map can draw the blur circle.
    ///
    /// Pure in `(self, access)`: repeated calls return identical views,
    /// so pins and lines are stable across renders.
    #[must_use]
    pub fn map_view(&self, access: LocationAccess) -> SessionMapView {
        let full_route = self
            .route
            .as_deref()
            .map_or_else(Route::empty, decode_or_empty);

        match access {
            LocationAccess::Exact => SessionMapView {
                session_id: self.id.clone(),
                start: self.start,
                end: self.end,
                route: full_route,
                blur_radius_meters: None,
            },
            LocationAccess::Blurred => {
                let radius = self.blur.meters();
                SessionMapView {
                    session_id: self.id.clone(),
                    start: displace(self.start, radius, &format!("{}_start", self.id)),
                    end: self
                        .end
                        .map(|end| displace(end, radius, &format!("{}_end", self.id))),
                    route: trim_start(&full_route, radius),
                    blur_radius_meters: Some(radius),
                }
            }
        }
    }
}

/// What the map actually renders for one session.
///
/// For blurred viewers this contains no true location data: the start
/// and end are displaced and the route's leading segment is gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMapView {
    /// Session this view belongs to.
    pub session_id: String,

    /// Point to pin (true or displaced, depending on access).
    pub start: Coordinate,

    /// Finish pin, if the session has one.
    pub end: Option<Coordinate>,

    /// Decoded route to draw (possibly trimmed, possibly empty).
    pub route: Route,

    /// Radius of the blur circle to draw, absent for exact views.
    pub blur_radius_meters: Option<f64>,
}

impl SessionMapView {
    /// Serializes the view to JSON for the frontend.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (extremely rare).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a view from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or missing fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
