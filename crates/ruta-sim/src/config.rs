//! Engine configuration.

use std::time::Duration;

use serde::Deserialize;

/// Tunables for the simulation core.
///
/// Typically loaded from a JSON/TOML file by the application crate.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Tick cadence in wall-clock milliseconds.  A fixed constant — never
    /// tied to cruise speed or playback rate.
    pub tick_interval_ms: u64,

    /// Playback multiplier applied to every new session.
    pub default_playback_rate: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
            default_playback_rate: 1.0,
        }
    }
}

impl SimConfig {
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
