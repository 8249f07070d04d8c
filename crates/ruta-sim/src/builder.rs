//! Builder for [`Simulator`].

use std::sync::Arc;

use ruta_core::{Clock, SystemClock};
use ruta_events::EventBus;
use ruta_loader::RouteLoader;

use crate::config::SimConfig;
use crate::sim::Simulator;

/// Assembles a [`Simulator`] from its collaborators.
///
/// Only the loader is mandatory; the bus defaults to a fresh [`EventBus`],
/// the clock to [`SystemClock`], and the config to [`SimConfig::default`].
pub struct SimBuilder {
    loader: Arc<dyn RouteLoader>,
    bus: Option<EventBus>,
    clock: Option<Arc<dyn Clock>>,
    config: SimConfig,
}

impl SimBuilder {
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self {
            loader,
            bus: None,
            clock: None,
            config: SimConfig::default(),
        }
    }

    /// Publish on an existing bus (typically shared with UI subscribers).
    pub fn bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Read time from `clock` instead of the system clock.  Tests pass a
    /// [`ruta_core::ManualClock`] here.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Simulator {
        Simulator::from_parts(
            self.loader,
            self.bus.unwrap_or_default(),
            self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
            self.config,
        )
    }
}
