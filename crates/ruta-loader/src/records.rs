//! Storage-backend wire types.
//!
//! The backend serves `GET {base}/routes` as a JSON array of saved routes.
//! Field names follow the backend's camelCase convention where they differ
//! from Rust style; unknown fields (e.g. `graph`, `created_at`) are ignored.

use serde::Deserialize;

use ruta_core::GeoPoint;

/// One saved route as served by the storage backend.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRecord {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Ordered user-selected waypoints.  At least 2 for any saved route.
    pub points: Vec<RoutePoint>,

    /// Total route length in metres, computed by the backend at save time.
    #[serde(default)]
    pub distance: f64,

    #[serde(default)]
    pub difficulty: u8,

    #[serde(default)]
    pub popularity: u8,

    /// Average risk over the route's control points.
    #[serde(default)]
    pub risk: f64,
}

impl RouteRecord {
    /// The waypoint coordinates in route order.
    pub fn waypoints(&self) -> Vec<GeoPoint> {
        self.points
            .iter()
            .map(|p| GeoPoint::new(p.lat, p.lng))
            .collect()
    }
}

/// One waypoint inside a [`RouteRecord`].
#[derive(Debug, Clone, Deserialize)]
pub struct RoutePoint {
    #[serde(rename = "nodeName")]
    pub node_name: String,

    pub lat: f64,
    pub lng: f64,

    /// `"interest"` or `"control"`.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Risk rating 1–5; present on control points only.
    #[serde(default)]
    pub risk: Option<u8>,
}
