//! Wall-clock abstraction.
//!
//! The simulation core converts elapsed wall-clock time into traveled
//! distance, so every time read goes through the [`Clock`] trait.  Production
//! code uses [`SystemClock`] (a monotonic `Instant` origin); tests and
//! headless hosts drive [`ManualClock`] to make time arithmetic exact and
//! repeatable.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

/// A monotonic time source, in seconds since an arbitrary origin.
///
/// Implementations must be `Send + Sync`: the reading side is the ticker
/// thread, the writing side (for [`ManualClock`]) is the test thread.
pub trait Clock: Send + Sync {
    /// Seconds elapsed since the clock's origin.  Must never decrease.
    fn monotonic_secs(&self) -> f64;
}

// ── SystemClock ───────────────────────────────────────────────────────────────

/// Real wall-clock time, measured from the instant the clock was created.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn monotonic_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

// ── ManualClock ───────────────────────────────────────────────────────────────

/// A hand-advanced clock for deterministic tests.
///
/// Cloning shares the underlying value, so a clone handed to the engine and
/// the original held by the test tick in lockstep.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    secs: Arc<Mutex<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute reading.  Never set a value lower than the current
    /// one; `Clock` promises monotonicity.
    pub fn set(&self, secs: f64) {
        *self.secs.lock().unwrap_or_else(PoisonError::into_inner) = secs;
    }

    /// Advance the reading by `secs`.
    pub fn advance(&self, secs: f64) {
        *self.secs.lock().unwrap_or_else(PoisonError::into_inner) += secs;
    }
}

impl Clock for ManualClock {
    fn monotonic_secs(&self) -> f64 {
        *self.secs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
