//! Loader configuration.

use serde::Deserialize;

/// Endpoints and credentials for the two external collaborators.
///
/// Typically loaded from a JSON/TOML file by the application crate; the
/// defaults point at a local storage backend and the public OpenRouteService
/// host.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Base URL of the storage backend serving `GET /routes`.
    pub base_url: String,

    /// Base URL of the routing provider.
    pub ors_base_url: String,

    /// `Authorization` header value for the routing provider.
    pub api_key: String,

    /// ORS routing profile used to densify waypoints into a polyline.
    ///
    /// Defaults to `cycling-regular` to suit the bike-planning frontend, a
    /// deliberate change from the `foot-walking` profile earlier deployments
    /// requested.  Any ORS profile id is accepted.
    pub profile: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url:     "http://localhost:5000".to_string(),
            ors_base_url: "https://api.openrouteservice.org".to_string(),
            api_key:      String::new(),
            profile:      "cycling-regular".to_string(),
        }
    }
}
