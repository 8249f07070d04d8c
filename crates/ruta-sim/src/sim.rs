//! The `Simulator` control surface and tick processing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use log::debug;

use ruta_core::{Clock, kmh_to_mps};
use ruta_events::{EventBus, SimEvent};
use ruta_loader::RouteLoader;

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::state::{Phase, SimSnapshot, SimulationState};
use crate::ticker::spawn_ticker;

// ── Shared engine internals ───────────────────────────────────────────────────

pub(crate) struct Inner {
    state: Mutex<SimulationState>,
    bus: EventBus,
    clock: Arc<dyn Clock>,
    loader: Arc<dyn RouteLoader>,
    config: SimConfig,
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// The route simulation engine: one session at a time, driven by a
/// fixed-cadence ticker, observed through the [`EventBus`].
///
/// Cloning yields another handle onto the same session, so UI components can
/// each hold their own control surface.
///
/// Every operation mutates state synchronously, builds its events while
/// holding the state lock, and publishes them after releasing it — listeners
/// may therefore call back into the control surface from inside a callback.
///
/// # Example
///
/// ```rust,ignore
/// let bus = EventBus::new();
/// bus.subscribe(EventKind::Progress, |event| {
///     if let SimEvent::Progress { position, .. } = event {
///         move_marker(*position);
///     }
/// });
///
/// let sim = Simulator::builder(Arc::new(HttpRouteLoader::new(&config)))
///     .bus(bus)
///     .build();
/// sim.start("Ruta Parque-Museo", 18.0)?;
/// ```
#[derive(Clone)]
pub struct Simulator {
    inner: Arc<Inner>,
}

impl Simulator {
    /// A simulator with a fresh bus, system clock, and default config.
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        crate::builder::SimBuilder::new(loader).build()
    }

    /// Start configuring a simulator.
    pub fn builder(loader: Arc<dyn RouteLoader>) -> crate::builder::SimBuilder {
        crate::builder::SimBuilder::new(loader)
    }

    pub(crate) fn from_parts(
        loader: Arc<dyn RouteLoader>,
        bus: EventBus,
        clock: Arc<dyn Clock>,
        config: SimConfig,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(SimulationState::new()),
                bus,
                clock,
                loader,
                config,
            }),
        }
    }

    /// The bus this engine publishes on.
    pub fn bus(&self) -> &EventBus {
        &self.inner.bus
    }

    pub fn phase(&self) -> Phase {
        self.lock_state().phase
    }

    /// Live read-only view of the session.
    pub fn snapshot(&self) -> SimSnapshot {
        let s = self.lock_state();
        let now = self.inner.clock.monotonic_secs();
        let elapsed_secs = s.elapsed_at(now);
        let extra = elapsed_secs - s.accumulated_secs;
        let distance_m =
            (s.distance_m + extra * kmh_to_mps(s.cruise_speed_kmh)).min(s.total_distance_m);

        SimSnapshot {
            phase: s.phase,
            route_name: (s.phase != Phase::Idle).then(|| s.route_name.clone()),
            total_distance_m: s.total_distance_m,
            cruise_speed_kmh: s.cruise_speed_kmh,
            playback_rate: s.playback_rate,
            distance_m,
            elapsed_secs,
            position: s.position,
            segment: s.segment,
        }
    }

    // ── Control surface ───────────────────────────────────────────────────

    /// Begin simulating `route_name` at `cruise_speed_kmh`.
    ///
    /// A live session (`Running`/`Paused`) is stopped first — its `Stop`
    /// event is published before this route's data is even requested.  The
    /// engine stays `Idle` while the loader resolves; on any failure the
    /// state is guaranteed untouched and no lifecycle event is published.
    ///
    /// A `stop` (or a newer `start`) issued while this call is awaiting the
    /// loader wins: the late route data is discarded and
    /// [`SimError::Superseded`] returned.
    pub fn start(&self, route_name: &str, cruise_speed_kmh: f64) -> SimResult<()> {
        // `!(x > 0.0)` also rejects NaN.
        if !(cruise_speed_kmh > 0.0) {
            return Err(SimError::InvalidSpeed(cruise_speed_kmh));
        }

        // Phase 1: claim the load slot, stopping any live session first.
        let mut events = Vec::new();
        let token;
        {
            let mut s = self.lock_state();
            if s.load_in_flight {
                return Err(SimError::StartInProgress);
            }
            match s.phase {
                Phase::Running | Phase::Paused => self.stop_session(&mut s, &mut events),
                Phase::Finished => s.reset(), // terminal; no Stop event
                Phase::Idle => {}
            }
            s.epoch += 1;
            token = s.epoch;
            s.load_in_flight = true;
        }
        self.publish_all(&events);

        // Phase 2: resolve the route.  The lock is not held here; the engine
        // is observably Idle until the data arrives.
        let loaded = match self.inner.loader.load(route_name) {
            Ok(loaded) => loaded,
            Err(e) => {
                let mut s = self.lock_state();
                if s.epoch == token {
                    s.load_in_flight = false;
                }
                return Err(e.into());
            }
        };

        // Phase 3: go live, unless a stop or newer start superseded us.
        let mut live_events = Vec::new();
        {
            let mut s = self.lock_state();
            if s.epoch != token {
                debug!("discarding superseded start of '{route_name}'");
                return Err(SimError::Superseded);
            }
            s.load_in_flight = false;

            let now = self.inner.clock.monotonic_secs();
            let initial_position = loaded.geometry.first();
            s.phase = Phase::Running;
            s.route_name = loaded.name;
            s.total_distance_m = loaded.total_distance_m;
            s.cruise_speed_kmh = cruise_speed_kmh;
            s.playback_rate = self.inner.config.default_playback_rate;
            s.accumulated_secs = 0.0;
            s.anchor_secs = now;
            s.distance_m = 0.0;
            s.segment = 0;
            s.position = Some(initial_position);
            s.geometry = Some(loaded.geometry);
            self.start_ticker(&mut s);

            live_events.push(SimEvent::Start {
                route_name: s.route_name.clone(),
                total_distance_m: s.total_distance_m,
                cruise_speed_kmh,
                initial_position,
            });
        }
        self.publish_all(&live_events);
        Ok(())
    }

    /// Freeze the session.  No-op unless `Running`.
    pub fn pause(&self) {
        let mut events = Vec::new();
        {
            let mut s = self.lock_state();
            if s.phase != Phase::Running {
                return;
            }
            s.fold_to(self.inner.clock.monotonic_secs());
            s.timer_generation += 1;
            s.ticker = None;
            s.phase = Phase::Paused;
            events.push(SimEvent::Pause { elapsed_secs: s.accumulated_secs });
        }
        self.publish_all(&events);
    }

    /// Continue a paused session.  No-op unless `Paused`.
    pub fn resume(&self) {
        let mut events = Vec::new();
        {
            let mut s = self.lock_state();
            if s.phase != Phase::Paused {
                return;
            }
            // Re-anchor so elapsed-time math stays continuous across the gap.
            s.anchor_secs = self.inner.clock.monotonic_secs();
            s.phase = Phase::Running;
            self.start_ticker(&mut s);
            events.push(SimEvent::Resume { elapsed_secs: s.accumulated_secs });
        }
        self.publish_all(&events);
    }

    /// Tear the session down.  Valid from any state; idempotent — a second
    /// call finds `Idle` and publishes nothing.  Also discards any `start`
    /// still awaiting route data.
    pub fn stop(&self) {
        let mut events = Vec::new();
        {
            let mut s = self.lock_state();
            s.epoch += 1;
            s.load_in_flight = false;
            if s.phase != Phase::Idle {
                self.stop_session(&mut s, &mut events);
            }
        }
        self.publish_all(&events);
    }

    /// Change the traveler's cruise speed, effective from this instant.
    /// Publishes nothing — observers see it on the next `Progress` tick.
    /// No-op unless `Running` or `Paused`, or if `cruise_speed_kmh` is not
    /// positive.
    pub fn change_speed(&self, cruise_speed_kmh: f64) {
        if !(cruise_speed_kmh > 0.0) {
            return;
        }
        let mut s = self.lock_state();
        match s.phase {
            Phase::Running => {
                // Fold distance at the old speed first so the change is
                // continuous in both position and elapsed time.
                s.fold_to(self.inner.clock.monotonic_secs());
                s.cruise_speed_kmh = cruise_speed_kmh;
            }
            Phase::Paused => s.cruise_speed_kmh = cruise_speed_kmh,
            _ => {}
        }
    }

    /// Change how fast simulated time advances relative to wall-clock time.
    /// Publishes a `SpeedChange` immediately so observers reflect the new
    /// multiplier without waiting for a tick.  No-op unless `Running` or
    /// `Paused`, or if `playback_rate` is not positive.
    pub fn change_playback_rate(&self, playback_rate: f64) {
        if !(playback_rate > 0.0) {
            return;
        }
        let mut events = Vec::new();
        {
            let mut s = self.lock_state();
            match s.phase {
                Phase::Running => {
                    s.fold_to(self.inner.clock.monotonic_secs());
                    s.playback_rate = playback_rate;
                }
                Phase::Paused => s.playback_rate = playback_rate,
                _ => return,
            }
            events.push(SimEvent::SpeedChange { playback_rate });
        }
        self.publish_all(&events);
    }

    /// Perform one tick now, regardless of the background cadence.
    ///
    /// Intended for tests and headless hosts that drive time themselves;
    /// a running session's own ticker calls the same logic.  Returns `false`
    /// once the session is no longer `Running`.
    pub fn tick_now(&self) -> bool {
        Self::tick_step(&self.inner, None)
    }

    // ── Tick processing ───────────────────────────────────────────────────

    /// One tick: fold time into distance, interpolate the position, publish
    /// `Progress` — or finalize with `Finish` when the route is complete.
    ///
    /// `expected_generation` is the spawning ticker's generation; a stale
    /// ticker (cancelled, or superseded by pause/resume) exits here without
    /// mutating anything.
    fn tick_step(inner: &Inner, expected_generation: Option<u64>) -> bool {
        let mut events = Vec::new();
        let keep_ticking = {
            let mut s = inner.state.lock().unwrap_or_else(PoisonError::into_inner);
            if s.phase != Phase::Running
                || expected_generation.is_some_and(|g| g != s.timer_generation)
            {
                false
            } else {
                s.fold_to(inner.clock.monotonic_secs());
                let finished = s.distance_m >= s.total_distance_m;
                let step = s.geometry.as_ref().map(|g| {
                    if finished {
                        (g.last(), g.segment_count() - 1)
                    } else {
                        g.position_at(s.distance_m)
                    }
                });
                match step {
                    None => false, // unreachable: geometry is Some outside Idle
                    Some((position, segment)) => {
                        s.position = Some(position);
                        s.segment = segment;
                        if finished {
                            s.phase = Phase::Finished;
                            s.timer_generation += 1;
                            // Dropping the handle on the ticker's own thread
                            // is fine; the thread is about to exit anyway.
                            s.ticker = None;
                            events.push(SimEvent::Finish {
                                route_name: s.route_name.clone(),
                                total_distance_m: s.total_distance_m,
                                total_secs: s.accumulated_secs,
                            });
                            false
                        } else {
                            events.push(SimEvent::Progress {
                                position,
                                distance_m: s.distance_m,
                                elapsed_secs: s.accumulated_secs,
                                average_speed_kmh: s.average_speed_kmh(),
                                segment,
                            });
                            true
                        }
                    }
                }
            }
        };
        for event in &events {
            inner.bus.publish(event);
        }
        keep_ticking
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Tear down a non-Idle session: fold final figures, invalidate the
    /// ticker, queue the `Stop` event, reset to Idle.  Does not bump the
    /// epoch — both callers do that themselves.
    fn stop_session(&self, s: &mut SimulationState, events: &mut Vec<SimEvent>) {
        if s.phase == Phase::Running {
            s.fold_to(self.inner.clock.monotonic_secs());
        }
        s.timer_generation += 1;
        s.ticker = None;
        events.push(SimEvent::Stop {
            route_name: s.route_name.clone(),
            distance_m: s.distance_m,
            elapsed_secs: s.accumulated_secs,
        });
        s.reset();
    }

    /// Spawn the session ticker under a fresh generation.
    ///
    /// The thread holds only a `Weak` reference: dropping the last
    /// `Simulator` clone lets the ticker wind down on its own.
    fn start_ticker(&self, s: &mut SimulationState) {
        s.timer_generation += 1;
        let generation = s.timer_generation;
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        s.ticker = Some(spawn_ticker(self.inner.config.tick_interval(), move || {
            match weak.upgrade() {
                Some(inner) => Simulator::tick_step(&inner, Some(generation)),
                None => false,
            }
        }));
    }

    fn publish_all(&self, events: &[SimEvent]) {
        for event in events {
            self.inner.bus.publish(event);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SimulationState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
