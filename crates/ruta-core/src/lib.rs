//! `ruta-core` — foundational types for the `rutasim` route-simulation engine.
//!
//! This crate is a dependency of every other `ruta-*` crate.  It intentionally
//! has no `ruta-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance, unit conversions     |
//! | [`polyline`] | `Polyline`, cumulative lengths, `position_at`        |
//! | [`time`]     | `Clock` trait, `SystemClock`, `ManualClock`          |
//! | [`error`]    | `CoreError`, `CoreResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod error;
pub mod geo;
pub mod polyline;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, kmh_to_mps, mps_to_kmh};
pub use polyline::Polyline;
pub use time::{Clock, ManualClock, SystemClock};
