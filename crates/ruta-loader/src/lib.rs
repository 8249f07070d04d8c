//! `ruta-loader` — resolves a route name into simulatable geometry.
//!
//! Two external collaborators are involved:
//!
//! 1. The **storage backend** keeps user-assembled routes (sparse waypoints
//!    plus a precomputed total distance).
//! 2. The **routing provider** (OpenRouteService) turns those waypoints into
//!    the dense routable polyline the engine interpolates along.
//!
//! The engine consumes both through the [`RouteLoader`] trait, so tests and
//! embedded hosts can swap in an in-memory source.
//!
//! # Crate layout
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`config`]  | `LoaderConfig` — endpoints, API key, routing profile |
//! | [`records`] | Backend wire types (`RouteRecord`, `RoutePoint`)     |
//! | [`storage`] | `StorageClient` — route list fetch + name selection  |
//! | [`ors`]     | `OrsClient` — directions request, GeoJSON parsing    |
//! | [`loader`]  | `RouteLoader` trait, `LoadedRoute`, `HttpRouteLoader`|
//! | [`error`]   | `LoaderError`, `LoaderResult`                        |

pub mod config;
pub mod error;
pub mod loader;
pub mod ors;
pub mod records;
pub mod storage;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::LoaderConfig;
pub use error::{LoaderError, LoaderResult};
pub use loader::{HttpRouteLoader, LoadedRoute, RouteLoader};
pub use ors::OrsClient;
pub use records::{RoutePoint, RouteRecord};
pub use storage::StorageClient;
