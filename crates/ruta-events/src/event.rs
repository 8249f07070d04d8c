//! Simulation event payloads.

use ruta_core::GeoPoint;

/// Everything the simulation core broadcasts over the [`EventBus`][crate::EventBus].
///
/// Distances are metres, times are simulated seconds, speeds are km/h.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// A new simulation session went live.
    Start {
        route_name:       String,
        total_distance_m: f64,
        cruise_speed_kmh: f64,
        /// The first vertex of the route geometry.
        initial_position: GeoPoint,
    },

    /// One tick of forward motion.
    Progress {
        position:          GeoPoint,
        distance_m:        f64,
        elapsed_secs:      f64,
        /// Distance over elapsed time, in km/h.  Equals the cruise speed
        /// while the speed has not been changed mid-run.
        average_speed_kmh: f64,
        /// Index of the polyline segment currently occupied.
        segment:           usize,
    },

    Pause {
        elapsed_secs: f64,
    },

    Resume {
        elapsed_secs: f64,
    },

    /// The session was torn down before (or after) completing.
    Stop {
        route_name:   String,
        distance_m:   f64,
        elapsed_secs: f64,
    },

    /// The traveler reached the end of the route.
    Finish {
        route_name:       String,
        total_distance_m: f64,
        total_secs:       f64,
    },

    /// The playback-rate multiplier changed.
    SpeedChange {
        playback_rate: f64,
    },
}

impl SimEvent {
    /// The discriminant used as the subscription key.
    pub fn kind(&self) -> EventKind {
        match self {
            SimEvent::Start { .. }       => EventKind::Start,
            SimEvent::Progress { .. }    => EventKind::Progress,
            SimEvent::Pause { .. }       => EventKind::Pause,
            SimEvent::Resume { .. }      => EventKind::Resume,
            SimEvent::Stop { .. }        => EventKind::Stop,
            SimEvent::Finish { .. }      => EventKind::Finish,
            SimEvent::SpeedChange { .. } => EventKind::SpeedChange,
        }
    }
}

/// Fieldless discriminants of [`SimEvent`], used to subscribe per kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    Progress,
    Pause,
    Resume,
    Stop,
    Finish,
    SpeedChange,
}

impl EventKind {
    /// Every kind, in declaration order.  Handy for catch-all subscribers.
    pub const ALL: [EventKind; 7] = [
        EventKind::Start,
        EventKind::Progress,
        EventKind::Pause,
        EventKind::Resume,
        EventKind::Stop,
        EventKind::Finish,
        EventKind::SpeedChange,
    ];
}
