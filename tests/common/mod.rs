//! Common test utilities for integration tests
//!
//! Test doubles for the domain ports plus small fixtures shared across
//! the store, service and adapter tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use cashtrack_client::domain::errors::{FetchError, FetchResult};
use cashtrack_client::domain::models::{Category, Principal};
use cashtrack_client::domain::observable::{Listener, Observable, Subscription};
use cashtrack_client::domain::ports::{CategoryApi, RemoteFetch, SessionProvider};

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Category fixture with a fixed name
pub fn category(id: i64, name: &str) -> Category {
    Category::new(id, name)
}

/// Names of the given categories, in order
pub fn names(items: &[Category]) -> Vec<String> {
    items.iter().map(|c| c.name.clone()).collect()
}

/// Session provider whose principal is set directly by the test
#[derive(Default)]
pub struct TestSession {
    user: Observable<Option<Principal>>,
}

impl TestSession {
    pub fn signed_in(id: i64) -> Arc<Self> {
        let session = Arc::new(Self::default());
        session.sign_in(id);
        session
    }

    pub fn signed_out() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sign_in(&self, id: i64) {
        self.user.set(Some(Principal::with_id(id)));
    }

    pub fn sign_out(&self) {
        self.user.set(None);
    }
}

impl SessionProvider for TestSession {
    fn current(&self) -> Option<Principal> {
        self.user.get()
    }

    fn subscribe(&self, listener: Listener<Option<Principal>>) -> Subscription {
        self.user.subscribe_listener(listener)
    }
}

/// Remote fetch double with scripted responses and an optional gate.
///
/// Each call takes the next scripted response (or repeats the fallback
/// once the script runs out). When gated, every call reports that it has
/// started and then waits for a permit from [`ScriptedFetch::release`].
pub struct ScriptedFetch {
    calls: AtomicUsize,
    script: Mutex<VecDeque<FetchResult<Vec<Category>>>>,
    fallback: Mutex<FetchResult<Vec<Category>>>,
    gate: Option<Semaphore>,
    started: Semaphore,
}

impl ScriptedFetch {
    /// Ungated fetch returning `items` every time
    pub fn returning(items: Vec<Category>) -> Arc<Self> {
        Arc::new(Self::build(Ok(items), false))
    }

    /// Ungated fetch failing every time
    pub fn failing(error: FetchError) -> Arc<Self> {
        Arc::new(Self::build(Err(error), false))
    }

    /// Gated fetch returning `items` once released
    pub fn gated(items: Vec<Category>) -> Arc<Self> {
        Arc::new(Self::build(Ok(items), true))
    }

    fn build(fallback: FetchResult<Vec<Category>>, gated: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            script: Mutex::new(VecDeque::new()),
            fallback: Mutex::new(fallback),
            gate: gated.then(|| Semaphore::new(0)),
            started: Semaphore::new(0),
        }
    }

    /// Queue a response for the next call
    pub fn push(&self, response: FetchResult<Vec<Category>>) {
        self.script.lock().unwrap().push_back(response);
    }

    /// Change the response used once the script is empty
    pub fn set_fallback(&self, response: FetchResult<Vec<Category>>) {
        *self.fallback.lock().unwrap() = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Wait until one more gated call has started
    pub async fn wait_started(&self) {
        self.started.acquire().await.unwrap().forget();
    }

    /// Let `n` gated calls finish, in the order they started
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    fn next_response(&self) -> FetchResult<Vec<Category>> {
        if let Some(response) = self.script.lock().unwrap().pop_front() {
            return response;
        }
        self.fallback.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteFetch<Category> for ScriptedFetch {
    async fn fetch_all(&self) -> FetchResult<Vec<Category>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self.next_response();
        if let Some(gate) = &self.gate {
            self.started.add_permits(1);
            gate.acquire().await.unwrap().forget();
        }
        response
    }
}

/// Category API double recording every call
#[derive(Default)]
pub struct MockCategoryApi {
    pub calls: Mutex<Vec<String>>,
    pub fail_with: Mutex<Option<FetchError>>,
    next_id: AtomicUsize,
}

impl MockCategoryApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicUsize::new(100),
            ..Self::default()
        })
    }

    pub fn fail_with(&self, error: FetchError) {
        *self.fail_with.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> FetchResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CategoryApi for MockCategoryApi {
    async fn create(&self, name: &str) -> FetchResult<Category> {
        self.record(format!("create {name}"))?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(Category::new(i64::try_from(id).unwrap(), name))
    }

    async fn rename(&self, id: i64, name: &str) -> FetchResult<()> {
        self.record(format!("rename {id} {name}"))
    }

    async fn delete(&self, id: i64) -> FetchResult<()> {
        self.record(format!("delete {id}"))
    }
}
