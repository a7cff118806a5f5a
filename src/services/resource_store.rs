//! Single-flight cached store for a server-owned collection.
//!
//! A `ResourceStore<T>` holds the items visible to the signed-in principal,
//! sorted by name. `load` fetches them at most once per principal and
//! coalesces concurrent callers onto one fetch. The store forgets everything
//! as soon as the session provider reports that the principal is gone or
//! has changed.
//!
//! Every fetch is tagged with a generation. A reset or a forced reload
//! moves the generation forward, and a fetch that finishes under an older
//! generation leaves the store untouched.
//!
//! State changes are written under the flight lock and published to
//! subscribers after it is released, so listeners may call back into the
//! store.

use feruca::Collator;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::cmp::Ordering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, error, info, instrument, warn};

use crate::domain::errors::FetchResult;
use crate::domain::models::{Identified, Named, Principal, ScopeKey};
use crate::domain::observable::{Observable, Readable, Subscription};
use crate::domain::ports::{RemoteFetch, SessionProvider};

type SharedLoad = Shared<BoxFuture<'static, bool>>;

/// Settings that differ between stores.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Name used in log records
    pub label: &'static str,
    /// Message published on `error` when a fetch fails
    pub error_message: String,
}

struct InFlight {
    scope: ScopeKey,
    generation: u64,
    load: SharedLoad,
}

#[derive(Default)]
struct FlightState {
    generation: u64,
    loaded_scope: Option<ScopeKey>,
    in_flight: Option<InFlight>,
}

enum LoadStart {
    Ready(bool),
    Pending(SharedLoad),
}

/// Observables written during one locked transition, published once the
/// lock is released.
#[derive(Default)]
struct Touched {
    items: bool,
    loading: bool,
    error: bool,
}

struct StoreInner<T> {
    options: StoreOptions,
    session: Arc<dyn SessionProvider>,
    fetcher: Arc<dyn RemoteFetch<T>>,
    items: Observable<Vec<T>>,
    loading: Observable<bool>,
    error: Observable<String>,
    flight: Mutex<FlightState>,
    session_subscription: Mutex<Option<Subscription>>,
}

/// Cloneable handle to a shared resource store.
///
/// Subscribers of the `watch_*` projections are notified after the store
/// has released its internal lock and always receive the value current at
/// notification time.
pub struct ResourceStore<T> {
    inner: Arc<StoreInner<T>>,
}

impl<T> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> ResourceStore<T>
where
    T: Identified + Named + Clone + Send + Sync + 'static,
{
    /// Create an empty store and subscribe it to principal changes.
    pub fn with_options(
        session: Arc<dyn SessionProvider>,
        fetcher: Arc<dyn RemoteFetch<T>>,
        options: StoreOptions,
    ) -> Self {
        let inner = Arc::new(StoreInner {
            options,
            session,
            fetcher,
            items: Observable::new(Vec::new()),
            loading: Observable::new(false),
            error: Observable::new(String::new()),
            flight: Mutex::new(FlightState::default()),
            session_subscription: Mutex::new(None),
        });

        let weak: Weak<StoreInner<T>> = Arc::downgrade(&inner);
        let subscription = inner
            .session
            .subscribe(Arc::new(move |principal: &Option<Principal>| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_principal_change(principal.as_ref().and_then(Principal::scope));
                }
            }));
        *inner
            .session_subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(subscription);

        Self { inner }
    }

    /// Replace all items.
    pub fn set_all(&self, items: Vec<T>) {
        self.inner.items.set(sort_by_name(items));
    }

    /// Insert an item. Duplicate ids are not rejected.
    pub fn add(&self, item: T) {
        self.inner.items.update(move |items| {
            let mut next = items.clone();
            next.push(item);
            sort_by_name(next)
        });
    }

    /// Replace the first item with the same id. No-op if none matches.
    pub fn update(&self, item: T) {
        let id = item.id();
        self.inner.items.update(move |items| {
            let mut next = items.clone();
            match next.iter().position(|existing| existing.id() == id) {
                Some(index) => {
                    next[index] = item;
                    sort_by_name(next)
                }
                None => next,
            }
        });
    }

    /// Remove every item with the given id.
    pub fn remove(&self, id: &T::Id) {
        self.inner.items.update(|items| {
            let mut next = items.clone();
            next.retain(|existing| existing.id() != *id);
            next
        });
    }

    /// Make sure the items of the current principal are loaded.
    ///
    /// Resolves `true` without touching the network when nobody is signed
    /// in or the current principal's items are already loaded (unless
    /// `force`). Joins a fetch already in flight for the same principal
    /// unless `force`. Failures are reported as `false` and through
    /// [`ResourceStore::error`]; this never panics or errors.
    #[instrument(skip(self), fields(store = self.inner.options.label))]
    pub async fn load(&self, force: bool) -> bool {
        match self.inner.begin_load(force) {
            LoadStart::Ready(outcome) => outcome,
            LoadStart::Pending(load) => load.await,
        }
    }

    /// Snapshot of the items, sorted by name.
    pub fn items(&self) -> Vec<T> {
        self.inner.items.get()
    }

    /// Whether a fetch for the current principal is outstanding.
    pub fn is_loading(&self) -> bool {
        self.inner.loading.get()
    }

    /// Current error message; empty when there is none.
    pub fn error(&self) -> String {
        self.inner.error.get()
    }

    /// Principal whose items are currently loaded.
    pub fn loaded_scope(&self) -> Option<ScopeKey> {
        self.inner.flight().loaded_scope
    }

    /// Read-only view of the items.
    pub fn watch_items(&self) -> Readable<Vec<T>> {
        self.inner.items.readable()
    }

    /// Read-only view of the loading flag.
    pub fn watch_loading(&self) -> Readable<bool> {
        self.inner.loading.readable()
    }

    /// Read-only view of the error message.
    pub fn watch_error(&self) -> Readable<String> {
        self.inner.error.readable()
    }
}

impl<T> StoreInner<T>
where
    T: Identified + Named + Clone + Send + Sync + 'static,
{
    fn flight(&self) -> MutexGuard<'_, FlightState> {
        self.flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_scope(&self) -> Option<ScopeKey> {
        self.session.current().as_ref().and_then(Principal::scope)
    }

    fn begin_load(self: &Arc<Self>, force: bool) -> LoadStart {
        let mut touched = Touched::default();
        let start = {
            let mut flight = self.flight();
            self.start_locked(&mut flight, &mut touched, force)
        };
        self.publish(&touched);
        start
    }

    fn start_locked(
        self: &Arc<Self>,
        flight: &mut FlightState,
        touched: &mut Touched,
        force: bool,
    ) -> LoadStart {
        let Some(scope) = self.current_scope() else {
            self.reset_locked(flight, touched);
            return LoadStart::Ready(true);
        };

        if !force && flight.loaded_scope == Some(scope) {
            debug!(scope, "cache hit");
            return LoadStart::Ready(true);
        }

        if !force {
            if let Some(in_flight) = flight.in_flight.as_ref().filter(|f| f.scope == scope) {
                debug!(scope, generation = in_flight.generation, "joining in-flight fetch");
                return LoadStart::Pending(in_flight.load.clone());
            }
        }

        flight.generation += 1;
        let generation = flight.generation;
        self.set_loading(touched, true);
        self.set_error(touched, String::new());

        let load = self.spawn_fetch(scope, generation);
        flight.in_flight = Some(InFlight {
            scope,
            generation,
            load: load.clone(),
        });
        LoadStart::Pending(load)
    }

    fn spawn_fetch(self: &Arc<Self>, scope: ScopeKey, generation: u64) -> SharedLoad {
        debug!(store = self.options.label, scope, generation, "fetch started");

        let inner = Arc::clone(self);
        let task = tokio::spawn(async move {
            let result = inner.fetcher.fetch_all().await;
            inner.commit(scope, generation, result)
        });

        let weak = Arc::downgrade(self);
        async move {
            match task.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    if let Some(inner) = weak.upgrade() {
                        error!(store = inner.options.label, scope, error = %err, "fetch task aborted");
                        inner.abandon(generation);
                    }
                    false
                }
            }
        }
        .boxed()
        .shared()
    }

    fn commit(&self, scope: ScopeKey, generation: u64, result: FetchResult<Vec<T>>) -> bool {
        let mut touched = Touched::default();
        let outcome = {
            let mut flight = self.flight();
            let current = flight.generation == generation && self.current_scope() == Some(scope);
            let label = self.options.label;

            match result {
                Ok(items) => {
                    if current {
                        let count = items.len();
                        self.set_items(&mut touched, sort_by_name(items));
                        flight.loaded_scope = Some(scope);
                        self.finish_locked(&mut flight, &mut touched);
                        info!(store = label, scope, count, "items loaded");
                    } else {
                        debug!(store = label, scope, generation, "discarding stale fetch result");
                    }
                    true
                }
                Err(err) => {
                    warn!(store = label, scope, kind = err.kind(), error = %err, "fetch failed");
                    if current {
                        self.fail_locked(&mut flight, &mut touched);
                    }
                    false
                }
            }
        };
        self.publish(&touched);
        outcome
    }

    fn abandon(&self, generation: u64) {
        let mut touched = Touched::default();
        {
            let mut flight = self.flight();
            if flight.generation == generation {
                self.fail_locked(&mut flight, &mut touched);
            }
        }
        self.publish(&touched);
    }

    fn on_principal_change(&self, scope: Option<ScopeKey>) {
        let mut touched = Touched::default();
        {
            let mut flight = self.flight();
            let invalidate = match scope {
                None => true,
                Some(scope) => {
                    flight.loaded_scope.is_some_and(|loaded| loaded != scope)
                        || flight.in_flight.as_ref().is_some_and(|f| f.scope != scope)
                }
            };
            if invalidate {
                self.reset_locked(&mut flight, &mut touched);
            }
        }
        self.publish(&touched);
    }

    fn fail_locked(&self, flight: &mut FlightState, touched: &mut Touched) {
        self.set_items(touched, Vec::new());
        self.set_error(touched, self.options.error_message.clone());
        flight.loaded_scope = None;
        self.finish_locked(flight, touched);
    }

    fn finish_locked(&self, flight: &mut FlightState, touched: &mut Touched) {
        flight.in_flight = None;
        self.set_loading(touched, false);
    }

    fn reset_locked(&self, flight: &mut FlightState, touched: &mut Touched) {
        flight.generation += 1;
        flight.loaded_scope = None;
        flight.in_flight = None;
        self.set_items(touched, Vec::new());
        self.set_loading(touched, false);
        self.set_error(touched, String::new());
        debug!(store = self.options.label, generation = flight.generation, "store reset");
    }

    fn set_items(&self, touched: &mut Touched, items: Vec<T>) {
        self.items.replace(items);
        touched.items = true;
    }

    fn set_loading(&self, touched: &mut Touched, loading: bool) {
        self.loading.replace(loading);
        touched.loading = true;
    }

    fn set_error(&self, touched: &mut Touched, message: String) {
        self.error.replace(message);
        touched.error = true;
    }

    /// Must be called without the flight lock held.
    fn publish(&self, touched: &Touched) {
        if touched.items {
            self.items.publish();
        }
        if touched.error {
            self.error.publish();
        }
        if touched.loading {
            self.loading.publish();
        }
    }
}

/// Locale-aware name order (Unicode collation, CLDR root), falling back to
/// the raw names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collate(&mut Collator::default(), a, b)
}

/// Stable sort by [`compare_names`].
pub fn sort_by_name<T: Named>(mut items: Vec<T>) -> Vec<T> {
    let mut collator = Collator::default();
    items.sort_by(|a, b| collate(&mut collator, a.name(), b.name()));
    items
}

fn collate(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: &'static str,
    }

    impl Identified for Item {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    impl Named for Item {
        fn name(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn test_compare_names_ignores_case() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zoo", "ant"), Ordering::Greater);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_compare_names_sorts_accents_with_base_letters() {
        let items = vec![
            Item { id: 1, name: "Zahnarzt" },
            Item { id: 2, name: "Ärzte" },
            Item { id: 3, name: "Bahn" },
            Item { id: 4, name: "Öffentlicher Verkehr" },
            Item { id: 5, name: "Miete" },
            Item { id: 6, name: "École" },
            Item { id: 7, name: "einkaufen" },
        ];
        let names: Vec<&str> = sort_by_name(items).iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            vec![
                "Ärzte",
                "Bahn",
                "École",
                "einkaufen",
                "Miete",
                "Öffentlicher Verkehr",
                "Zahnarzt"
            ]
        );
    }

    #[test]
    fn test_sort_by_name_is_stable_for_equal_names() {
        let items = vec![
            Item { id: 1, name: "B" },
            Item { id: 2, name: "a" },
            Item { id: 3, name: "B" },
        ];
        let sorted = sort_by_name(items);
        let ids: Vec<u32> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
