//! The fixed-cadence background ticker.
//!
//! One thread per running session, driven by a `crossbeam_channel::tick`
//! channel.  Cancellation is cooperative and double-layered: dropping the
//! [`TickerHandle`] disconnects the stop channel (the thread exits on its
//! next wake), and the engine's timer-generation check makes a still-draining
//! thread exit without mutating state even if it races one more wake.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Sender, bounded, select, tick};
use log::warn;

/// Owning handle for a ticker thread.  Dropping it stops the ticker.
pub(crate) struct TickerHandle {
    _stop: Sender<()>,
}

/// Spawn a thread invoking `on_tick` every `interval` until it returns
/// `false` or the returned handle is dropped.
pub(crate) fn spawn_ticker<F>(interval: Duration, mut on_tick: F) -> TickerHandle
where
    F: FnMut() -> bool + Send + 'static,
{
    let (stop_tx, stop_rx) = bounded::<()>(0);

    let spawned = thread::Builder::new()
        .name("ruta-ticker".to_string())
        .spawn(move || {
            let ticks = tick(interval);
            loop {
                select! {
                    recv(ticks) -> _ => {
                        if !on_tick() {
                            break;
                        }
                    }
                    // Fires on disconnect, i.e. when the handle is dropped.
                    recv(stop_rx) -> _ => break,
                }
            }
        });

    if let Err(e) = spawned {
        warn!("failed to spawn ticker thread: {e}");
    }

    TickerHandle { _stop: stop_tx }
}
