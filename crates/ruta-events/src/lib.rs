//! `ruta-events` — the typed event channel between the simulation core and
//! its observers (map marker, status panel, modal, …).
//!
//! The channel is pure transport: it holds no simulation state, and the core
//! never references a listener directly.  Publishing is synchronous fan-out
//! in subscription order, with per-listener panic isolation so one faulty
//! observer cannot starve the rest.
//!
//! # Crate layout
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | [`event`] | `SimEvent` payloads, `EventKind` discriminants  |
//! | [`bus`]   | `EventBus`, `SubscriptionId`                    |

pub mod bus;
pub mod event;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bus::{EventBus, SubscriptionId};
pub use event::{EventKind, SimEvent};
