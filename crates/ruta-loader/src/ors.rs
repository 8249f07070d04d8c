//! OpenRouteService client and GeoJSON parsing.
//!
//! The provider is asked for a `/geojson` directions response; its geometry
//! carries **longitude-first** coordinate pairs, which are swapped into
//! `GeoPoint { lat, lon }` here and nowhere else.

use log::debug;
use serde::Deserialize;

use ruta_core::{GeoPoint, Polyline};

use crate::config::LoaderConfig;
use crate::error::{LoaderError, LoaderResult};

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct OrsResponse {
    pub features: Vec<OrsFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrsFeature {
    pub geometry: OrsGeometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrsGeometry {
    /// `[lon, lat]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

// ── Client ────────────────────────────────────────────────────────────────────

/// Blocking HTTP client for the routing provider.
pub struct OrsClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    profile: String,
}

impl OrsClient {
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: config.ors_base_url.clone(),
            api_key: config.api_key.clone(),
            profile: config.profile.clone(),
        }
    }

    /// Submit `waypoints` and return the densified routable polyline.
    ///
    /// Non-2xx responses are a hard failure — callers must not retry within
    /// a single load.
    pub fn fetch_geometry(&self, waypoints: &[GeoPoint]) -> LoaderResult<Polyline> {
        let url = format!("{}/v2/directions/{}/geojson", self.base_url, self.profile);
        debug!("requesting geometry for {} waypoints from {url}", waypoints.len());

        let coordinates: Vec<[f64; 2]> = waypoints.iter().map(|p| [p.lon, p.lat]).collect();
        let body = serde_json::json!({
            "coordinates": coordinates,
            "instructions": false,
        });

        let response = self
            .http
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoaderError::Provider {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        polyline_from_response(response.json()?)
    }
}

/// Convert a parsed directions response into a [`Polyline`].
pub(crate) fn polyline_from_response(response: OrsResponse) -> LoaderResult<Polyline> {
    let feature = response
        .features
        .into_iter()
        .next()
        .ok_or_else(|| LoaderError::Payload("no features in directions response".to_string()))?;

    let points: Vec<GeoPoint> = feature
        .geometry
        .coordinates
        .iter()
        .map(|&[lon, lat]| GeoPoint::new(lat, lon))
        .collect();

    Ok(Polyline::new(points)?)
}
