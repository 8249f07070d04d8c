//! The loading seam the engine consumes.
//!
//! # Pluggability
//!
//! `ruta-sim` resolves routes via the [`RouteLoader`] trait, so tests and
//! embedded hosts can swap in an in-memory source without touching the
//! engine.  The default [`HttpRouteLoader`] composes the storage backend and
//! the routing provider.

use log::warn;

use ruta_core::Polyline;

use crate::config::LoaderConfig;
use crate::error::{LoaderError, LoaderResult};
use crate::ors::OrsClient;
use crate::storage::StorageClient;

// ── LoadedRoute ───────────────────────────────────────────────────────────────

/// Everything the simulation core needs to run a session.
#[derive(Debug, Clone)]
pub struct LoadedRoute {
    pub name: String,

    /// Total route length in metres; always > 0.
    pub total_distance_m: f64,

    /// The dense routable polyline.
    pub geometry: Polyline,
}

// ── RouteLoader trait ─────────────────────────────────────────────────────────

/// Resolve a route name into simulatable geometry.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the engine shares the loader with
/// whoever drives the control surface.
pub trait RouteLoader: Send + Sync {
    /// Resolve `route_name`.  Failures are terminal for the calling `start`;
    /// nothing is retried.
    fn load(&self, route_name: &str) -> LoaderResult<LoadedRoute>;
}

// ── HttpRouteLoader ───────────────────────────────────────────────────────────

/// The production loader: storage backend for metadata, OpenRouteService for
/// the polyline.
pub struct HttpRouteLoader {
    storage: StorageClient,
    ors: OrsClient,
}

impl HttpRouteLoader {
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            storage: StorageClient::new(config),
            ors: OrsClient::new(config),
        }
    }
}

impl RouteLoader for HttpRouteLoader {
    fn load(&self, route_name: &str) -> LoaderResult<LoadedRoute> {
        let record = self.storage.fetch_route_details(route_name)?;
        let geometry = self.ors.fetch_geometry(&record.waypoints())?;
        let total_distance_m = resolve_total(route_name, record.distance, &geometry)?;

        Ok(LoadedRoute {
            name: record.name,
            total_distance_m,
            geometry,
        })
    }
}

/// Prefer the backend's precomputed total; fall back to the polyline length
/// when the record carries a non-positive distance (older saves).  The engine
/// requires a positive route total, so a zero-length fallback fails the load.
pub(crate) fn resolve_total(
    route_name: &str,
    record_distance: f64,
    geometry: &Polyline,
) -> LoaderResult<f64> {
    if record_distance > 0.0 {
        return Ok(record_distance);
    }
    let fallback = geometry.total_m();
    if fallback <= 0.0 {
        return Err(LoaderError::ZeroLengthGeometry(route_name.to_string()));
    }
    warn!("route '{route_name}' has no stored distance; using polyline length {fallback:.1} m");
    Ok(fallback)
}
