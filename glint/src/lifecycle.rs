//! Surface availability events.
//!
//! ## Usage
//!
//! Platform glue fires [`SurfaceEventHub::notify_surface_available`] when the
//! application's primary surface comes up; controllers created before that
//! point register a listener and react once.

use std::sync::Arc;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};
use tracing::debug;

new_key_type! {
    /// Key identifying a registered surface availability listener.
    pub struct SurfaceListenerKey;
}

/// Callback invoked when the primary surface becomes available.
pub type SurfaceListener = Arc<dyn Fn() + Send + Sync>;

/// Cancellable registration for the "primary surface became available" event.
pub trait SurfaceEventSource: Send + Sync {
    /// Registers `listener` to run on the next availability event.
    fn subscribe(&self, listener: SurfaceListener) -> SurfaceListenerKey;

    /// Cancels a registration. Stale keys are ignored.
    fn unsubscribe(&self, key: SurfaceListenerKey);
}

/// In-process implementation of [`SurfaceEventSource`].
///
/// The hub does not deregister listeners when it fires: the event may be
/// delivered more than once, and the one-shot discipline belongs to the
/// listener itself.
#[derive(Default)]
pub struct SurfaceEventHub {
    listeners: RwLock<SlotMap<SurfaceListenerKey, SurfaceListener>>,
}

impl SurfaceEventHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes every registered listener synchronously.
    pub fn notify_surface_available(&self) {
        let listeners: Vec<SurfaceListener> = self.listeners.read().values().cloned().collect();
        debug!("surface became available, notifying {} listener(s)", listeners.len());
        for listener in listeners {
            listener();
        }
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}

impl SurfaceEventSource for SurfaceEventHub {
    fn subscribe(&self, listener: SurfaceListener) -> SurfaceListenerKey {
        self.listeners.write().insert(listener)
    }

    fn unsubscribe(&self, key: SurfaceListenerKey) {
        self.listeners.write().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    #[test]
    fn notify_invokes_registered_listeners() {
        let hub = SurfaceEventHub::new();
        let fired = Arc::new(Mutex::new(0));
        let counter = fired.clone();
        hub.subscribe(Arc::new(move || *counter.lock() += 1));

        hub.notify_surface_available();
        hub.notify_surface_available();

        assert_eq!(*fired.lock(), 2);
    }

    #[test]
    fn unsubscribe_cancels_a_registration() {
        let hub = SurfaceEventHub::new();
        let fired = Arc::new(Mutex::new(0));
        let counter = fired.clone();
        let key = hub.subscribe(Arc::new(move || *counter.lock() += 1));
        assert_eq!(hub.listener_count(), 1);

        hub.unsubscribe(key);
        hub.notify_surface_available();

        assert_eq!(*fired.lock(), 0);
        assert_eq!(hub.listener_count(), 0);

        // A second removal with the same key is harmless.
        hub.unsubscribe(key);
    }

    #[test]
    fn notify_with_no_listeners_is_a_no_op() {
        let hub = SurfaceEventHub::new();
        hub.notify_surface_available();
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn listener_may_unsubscribe_itself_while_firing() {
        let hub = Arc::new(SurfaceEventHub::new());
        let key_slot = Arc::new(Mutex::new(None));

        let hub_for_listener = hub.clone();
        let key_for_listener = key_slot.clone();
        let key = hub.subscribe(Arc::new(move || {
            if let Some(key) = key_for_listener.lock().take() {
                hub_for_listener.unsubscribe(key);
            }
        }));
        *key_slot.lock() = Some(key);

        hub.notify_surface_available();
        assert_eq!(hub.listener_count(), 0);
    }
}
