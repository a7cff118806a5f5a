//! Observable value container with synchronous change notification.
//!
//! `Observable<T>` is a cloneable handle to a shared value. Every
//! `set`/`update` notifies all current subscribers before returning, and a
//! new subscriber is called once with the current value on registration.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Callback invoked with the latest value.
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Shared<T> {
    value: Mutex<T>,
    listeners: Mutex<BTreeMap<u64, Listener<T>>>,
    next_id: AtomicU64,
}

impl<T> Shared<T> {
    fn value(&self) -> MutexGuard<'_, T> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn listeners(&self) -> MutexGuard<'_, BTreeMap<u64, Listener<T>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shared, observable value.
pub struct Observable<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Default + Clone + Send + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.shared.value())
            .field("subscribers", &self.shared.listeners().len())
            .finish()
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    /// Observable holding `value` with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: Mutex::new(value),
                listeners: Mutex::new(BTreeMap::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.shared.value().clone()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        let snapshot = {
            let mut current = self.shared.value();
            *current = value;
            current.clone()
        };
        self.notify(&snapshot);
    }

    /// Derive the next value from the current one and notify subscribers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let snapshot = {
            let mut current = self.shared.value();
            *current = f(&current);
            current.clone()
        };
        self.notify(&snapshot);
    }

    /// Replace the value without notifying anyone.
    ///
    /// Subscribers learn about the change on the next [`Observable::publish`].
    pub(crate) fn replace(&self, value: T) {
        *self.shared.value() = value;
    }

    /// Notify every subscriber with the current value.
    pub(crate) fn publish(&self) {
        let snapshot = self.get();
        self.notify(&snapshot);
    }

    /// Register a listener. It runs immediately with the current value and
    /// again after every change until the returned `Subscription` is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribe_listener(Arc::new(listener))
    }

    /// Like [`Observable::subscribe`] for an already shared listener.
    pub fn subscribe_listener(&self, listener: Listener<T>) -> Subscription {
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        self.shared.listeners().insert(id, Arc::clone(&listener));

        let current = self.get();
        listener(&current);

        let weak: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.listeners().remove(&id);
            }
        })
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners().len()
    }

    /// Read-only view sharing this value.
    pub fn readable(&self) -> Readable<T> {
        Readable {
            inner: self.clone(),
        }
    }

    fn notify(&self, value: &T) {
        // Listeners run outside both locks so they may read or subscribe.
        let listeners: Vec<Listener<T>> = self.shared.listeners().values().cloned().collect();
        for listener in listeners {
            listener(value);
        }
    }
}

/// Read-only projection of an [`Observable`].
pub struct Readable<T> {
    inner: Observable<T>,
}

impl<T> Clone for Readable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Readable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T: Clone + Send + 'static> Readable<T> {
    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// See [`Observable::subscribe`].
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.inner.subscribe(listener)
    }
}

/// Handle that keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Subscription that runs `cancel` once when released.
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Remove the listener now.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
