//! The event bus: subscribe / unsubscribe / synchronous publish.

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, PoisonError, TryLockError};

use log::warn;

use crate::event::{EventKind, SimEvent};

/// Handle returned by [`EventBus::subscribe`]; pass it to
/// [`EventBus::unsubscribe`] to detach the listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&SimEvent) + Send>;

struct Listener {
    id: SubscriptionId,
    // Each callback sits behind its own mutex so `publish` can release the
    // registry lock before fanning out.  Listeners may then subscribe,
    // unsubscribe, or call back into the control surface from inside a
    // callback without deadlocking.
    callback: Arc<Mutex<Callback>>,
}

struct Inner {
    next_id: u64,
    listeners: HashMap<EventKind, Vec<Listener>>,
}

/// A cloneable publish/subscribe channel for [`SimEvent`]s.
///
/// Clones share the listener registry, so the engine and any number of UI
/// components can hold their own handle.  Publishing is synchronous: every
/// listener subscribed to the event's kind runs, in subscription order,
/// before `publish` returns.  A panicking listener is logged and skipped —
/// it never prevents delivery to the listeners after it.
///
/// A listener may publish from inside its callback.  Delivery of that nested
/// event skips any listener that is already mid-callback (itself included) —
/// logged as a warning — instead of deadlocking on the callback's own mutex.
/// The same rule applies to a listener still running when another thread
/// publishes concurrently.
///
/// An `unsubscribe` racing a `publish` on another thread takes effect for
/// subsequent publishes; the in-flight fan-out may still deliver one event.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Mutex<Inner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_id: 0,
                listeners: HashMap::new(),
            })),
        }
    }

    /// Register `callback` for events of `kind`.
    pub fn subscribe<F>(&self, kind: EventKind, callback: F) -> SubscriptionId
    where
        F: FnMut(&SimEvent) + Send + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.entry(kind).or_default().push(Listener {
            id,
            callback: Arc::new(Mutex::new(Box::new(callback))),
        });
        id
    }

    /// Detach a listener.  Returns `true` if it was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        for listeners in inner.listeners.values_mut() {
            if let Some(index) = listeners.iter().position(|l| l.id == id) {
                listeners.remove(index);
                return true;
            }
        }
        false
    }

    /// Deliver `event` to every listener of its kind, in subscription order.
    pub fn publish(&self, event: &SimEvent) {
        // Snapshot the fan-out list, then release the registry lock before
        // running any listener code.
        let callbacks: Vec<(SubscriptionId, Arc<Mutex<Callback>>)> = {
            let inner = self.lock();
            match inner.listeners.get(&event.kind()) {
                None => return,
                Some(listeners) => listeners
                    .iter()
                    .map(|l| (l.id, Arc::clone(&l.callback)))
                    .collect(),
            }
        };

        for (id, callback) in callbacks {
            // try_lock: a held mutex means this listener is already
            // mid-callback (a re-entrant publish from inside it, or a
            // concurrent publish on another thread).  Blocking here would
            // self-deadlock in the re-entrant case, so the listener is
            // skipped for this event.
            let mut callback = match callback.try_lock() {
                Ok(guard) => guard,
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                Err(TryLockError::WouldBlock) => {
                    warn!(
                        "event listener {id:?} is already running; skipping delivery of {:?}",
                        event.kind()
                    );
                    continue;
                }
            };
            let outcome = catch_unwind(AssertUnwindSafe(|| callback(event)));
            if outcome.is_err() {
                warn!("event listener {id:?} panicked on {:?}; continuing fan-out", event.kind());
            }
        }
    }

    /// Number of listeners currently registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.lock().listeners.get(&kind).map_or(0, Vec::len)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
