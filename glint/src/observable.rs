//! Single-slot observable value cell.
//!
//! ## Usage
//!
//! Hold one piece of published state and notify subscribers synchronously on
//! every write.

use std::sync::Arc;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Key identifying a live subscription on an [`Observable`].
    pub struct SubscriptionKey;
}

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Single-slot observable cell with synchronous publish-on-write semantics.
///
/// The cell holds exactly one value. [`set`](Observable::set) replaces it and
/// invokes every current subscriber with the published value before it
/// returns. Subscribers registered later observe only future publishes; the
/// current value is read explicitly with [`get`](Observable::get) or
/// [`with`](Observable::with). There is no replay buffer beyond the last
/// written value.
pub struct Observable<T> {
    value: RwLock<T>,
    subscribers: RwLock<SlotMap<SubscriptionKey, Subscriber<T>>>,
}

impl<T> Observable<T> {
    /// Creates a cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            subscribers: RwLock::new(SlotMap::with_key()),
        }
    }

    /// Executes `f` with a shared reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read())
    }

    /// Registers `subscriber` for future publishes.
    ///
    /// The subscriber is not invoked at registration time; read the current
    /// value with [`get`](Observable::get) or [`with`](Observable::with) when
    /// attaching.
    pub fn subscribe(&self, subscriber: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionKey {
        self.subscribers.write().insert(Arc::new(subscriber))
    }

    /// Removes a subscription. Stale or already removed keys are ignored.
    pub fn unsubscribe(&self, key: SubscriptionKey) {
        self.subscribers.write().remove(key);
    }

    /// Returns the number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

impl<T: Clone> Observable<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Stores `value` and synchronously notifies all current subscribers.
    ///
    /// No lock is held while subscribers run, so a subscriber may read the
    /// cell or publish again.
    pub fn set(&self, value: T) {
        let published = value.clone();
        *self.value.write() = value;

        let subscribers: Vec<Subscriber<T>> = self.subscribers.read().values().cloned().collect();
        for subscriber in subscribers {
            subscriber(&published);
        }
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
