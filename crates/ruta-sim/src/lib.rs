//! `ruta-sim` — the route simulation core.
//!
//! Given a loaded route geometry, a [`Simulator`] animates a virtual traveler
//! along it in real time: a background ticker folds wall-clock time into
//! simulated seconds, converts those into traveled metres at the cruise
//! speed, interpolates the current position, and broadcasts progress over a
//! [`ruta_events::EventBus`].  Any number of decoupled observers (map marker,
//! status panel, modal) subscribe to the bus; none of them can mutate engine
//! state except through the control surface.
//!
//! # State machine
//!
//! ```text
//! Idle ──start──▶ Running ◀──resume── Paused
//!                    │  └────pause────▲
//!                    └──▶ Finished
//! any non-Idle ──stop──▶ Idle
//! ```
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`sim`]     | `Simulator` — control surface + tick processing     |
//! | [`builder`] | `SimBuilder`                                        |
//! | [`state`]   | `Phase`, `SimSnapshot`, internal session state      |
//! | [`config`]  | `SimConfig` — tick cadence, default playback rate   |
//! | `ticker`    | Background cadence thread (crossbeam tick channel)  |
//! | [`error`]   | `SimError`, `SimResult`                             |

pub mod builder;
pub mod config;
pub mod error;
pub mod sim;
pub mod state;

mod ticker;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use sim::Simulator;
pub use state::{Phase, SimSnapshot};
