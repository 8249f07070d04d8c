//! Session state and elapsed-time bookkeeping.

use ruta_core::{GeoPoint, Polyline, kmh_to_mps, mps_to_kmh};

use crate::ticker::TickerHandle;

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Lifecycle phase of the (single) simulation session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// The one mutable record behind the engine.  Guarded by the `Simulator`'s
/// mutex; never exposed directly (observers get [`SimSnapshot`]s and events).
///
/// # Time model
///
/// `accumulated_secs` holds the simulated seconds folded in so far and
/// `anchor_secs` the clock reading of the last fold.  While `Running`,
///
/// ```text
/// elapsed = accumulated_secs + (now - anchor_secs) * playback_rate
/// ```
///
/// Every tick, pause, and speed/playback change folds elapsed time to `now`
/// and advances `distance_m` by `Δelapsed × cruise_m_per_s`.  Integrating
/// incrementally (rather than recomputing `speed × elapsed` from scratch)
/// keeps both position and elapsed time continuous across mid-run speed and
/// playback changes.
pub(crate) struct SimulationState {
    pub phase: Phase,
    pub route_name: String,
    pub geometry: Option<Polyline>,

    /// Total route length in metres; > 0 whenever `phase != Idle`.
    pub total_distance_m: f64,
    pub cruise_speed_kmh: f64,
    pub playback_rate: f64,

    pub accumulated_secs: f64,
    pub anchor_secs: f64,

    /// Simulated metres covered so far; clamped to `total_distance_m`.
    pub distance_m: f64,
    pub segment: usize,
    pub position: Option<GeoPoint>,

    /// Session counter.  Bumped by every `start` and `stop`; a `start` whose
    /// route data resolves under a different epoch discards the result.
    pub epoch: u64,

    /// `true` while a `start` is awaiting route data (engine stays `Idle`).
    pub load_in_flight: bool,

    /// Ticker counter.  Bumped whenever a ticker is spawned or invalidated;
    /// a ticker thread whose generation no longer matches exits without
    /// touching state, so at most one timer ever mutates the session.
    pub timer_generation: u64,
    pub ticker: Option<TickerHandle>,
}

impl SimulationState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            route_name: String::new(),
            geometry: None,
            total_distance_m: 0.0,
            cruise_speed_kmh: 0.0,
            playback_rate: 1.0,
            accumulated_secs: 0.0,
            anchor_secs: 0.0,
            distance_m: 0.0,
            segment: 0,
            position: None,
            epoch: 0,
            load_in_flight: false,
            timer_generation: 0,
            ticker: None,
        }
    }

    /// Back to the `Idle` defaults.  The epoch and timer-generation counters
    /// survive — they guard against stale threads and late network replies
    /// across sessions.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.route_name.clear();
        self.geometry = None;
        self.total_distance_m = 0.0;
        self.cruise_speed_kmh = 0.0;
        self.playback_rate = 1.0;
        self.accumulated_secs = 0.0;
        self.anchor_secs = 0.0;
        self.distance_m = 0.0;
        self.segment = 0;
        self.position = None;
        self.load_in_flight = false;
        self.ticker = None;
    }

    /// Simulated seconds elapsed at clock reading `now_secs`.
    pub fn elapsed_at(&self, now_secs: f64) -> f64 {
        match self.phase {
            Phase::Running => {
                self.accumulated_secs
                    + (now_secs - self.anchor_secs).max(0.0) * self.playback_rate
            }
            _ => self.accumulated_secs,
        }
    }

    /// Fold simulated time up to `now_secs` into the bookkeeping fields,
    /// advancing `distance_m` at the current cruise speed.
    pub fn fold_to(&mut self, now_secs: f64) {
        let elapsed = self.elapsed_at(now_secs);
        let delta = elapsed - self.accumulated_secs;
        if delta > 0.0 {
            self.distance_m = (self.distance_m + delta * kmh_to_mps(self.cruise_speed_kmh))
                .min(self.total_distance_m);
        }
        self.accumulated_secs = elapsed;
        self.anchor_secs = now_secs;
    }

    /// Distance over elapsed time in km/h; the cruise speed before any time
    /// has elapsed.
    pub fn average_speed_kmh(&self) -> f64 {
        if self.accumulated_secs > 0.0 {
            mps_to_kmh(self.distance_m / self.accumulated_secs)
        } else {
            self.cruise_speed_kmh
        }
    }
}

// ── SimSnapshot ───────────────────────────────────────────────────────────────

/// A read-only view of the session for polling UIs.
///
/// `distance_m` and `elapsed_secs` are live values (extrapolated to the
/// moment of the call while `Running`), not the last tick's.
#[derive(Debug, Clone, PartialEq)]
pub struct SimSnapshot {
    pub phase: Phase,
    /// `None` while `Idle`.
    pub route_name: Option<String>,
    pub total_distance_m: f64,
    pub cruise_speed_kmh: f64,
    pub playback_rate: f64,
    pub distance_m: f64,
    pub elapsed_secs: f64,
    pub position: Option<GeoPoint>,
    pub segment: usize,
}
