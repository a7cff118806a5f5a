//! Signed-in user state backed by the auth service.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::models::Principal;
use crate::domain::observable::{Listener, Observable, Readable, Subscription};
use crate::domain::ports::{AuthApi, SessionProvider};

/// Holds the current principal and publishes every change.
///
/// This is the [`SessionProvider`] handed to the resource stores.
pub struct UserSession {
    auth: Arc<dyn AuthApi>,
    user: Observable<Option<Principal>>,
}

impl UserSession {
    /// Signed-out session over `auth`.
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self {
            auth,
            user: Observable::new(None),
        }
    }

    /// Ask the server who is signed in and publish the answer.
    ///
    /// Any failure publishes "signed out".
    #[instrument(skip(self))]
    pub async fn load_user(&self) -> Option<Principal> {
        match self.auth.me().await {
            Ok(Some(user)) => {
                info!(user_id = ?user.id, "session restored");
                self.user.set(Some(user.clone()));
                Some(user)
            }
            Ok(None) | Err(FetchError::AuthenticationDenied) => {
                self.user.set(None);
                None
            }
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "failed to load current user");
                self.user.set(None);
                None
            }
        }
    }

    /// End the session. The principal is cleared even if the server call fails.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> FetchResult<()> {
        let result = self.auth.logout().await;
        self.user.set(None);
        if let Err(err) = &result {
            warn!(kind = err.kind(), error = %err, "logout request failed");
        }
        result
    }

    /// Publish a principal obtained elsewhere, e.g. after sign-in.
    pub fn set(&self, principal: Option<Principal>) {
        self.user.set(principal);
    }

    /// Read-only view of the principal.
    pub fn watch(&self) -> Readable<Option<Principal>> {
        self.user.readable()
    }
}

impl SessionProvider for UserSession {
    fn current(&self) -> Option<Principal> {
        self.user.get()
    }

    fn subscribe(&self, listener: Listener<Option<Principal>>) -> Subscription {
        self.user.subscribe_listener(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock auth API returning canned results
    struct MockAuthApi {
        me: Mutex<FetchResult<Option<Principal>>>,
        logout: Mutex<FetchResult<()>>,
        logout_calls: AtomicUsize,
    }

    impl MockAuthApi {
        fn new(me: FetchResult<Option<Principal>>, logout: FetchResult<()>) -> Self {
            Self {
                me: Mutex::new(me),
                logout: Mutex::new(logout),
                logout_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AuthApi for MockAuthApi {
        async fn me(&self) -> FetchResult<Option<Principal>> {
            self.me.lock().unwrap().clone()
        }

        async fn logout(&self) -> FetchResult<()> {
            self.logout_calls.fetch_add(1, Ordering::SeqCst);
            self.logout.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn test_load_user_publishes_principal() {
        let auth = Arc::new(MockAuthApi::new(Ok(Some(Principal::with_id(3))), Ok(())));
        let session = UserSession::new(auth);

        let user = session.load_user().await;

        assert_eq!(user, Some(Principal::with_id(3)));
        assert_eq!(session.current(), Some(Principal::with_id(3)));
    }

    #[tokio::test]
    async fn test_load_user_clears_on_auth_denied() {
        let auth = Arc::new(MockAuthApi::new(Err(FetchError::AuthenticationDenied), Ok(())));
        let session = UserSession::new(auth);
        session.set(Some(Principal::with_id(1)));

        assert_eq!(session.load_user().await, None);
        assert_eq!(session.current(), None);
    }

    #[tokio::test]
    async fn test_load_user_clears_on_transport_error() {
        let auth = Arc::new(MockAuthApi::new(
            Err(FetchError::Transport("connection refused".into())),
            Ok(()),
        ));
        let session = UserSession::new(auth);
        session.set(Some(Principal::with_id(1)));

        assert_eq!(session.load_user().await, None);
        assert_eq!(session.current(), None);
    }

    #[tokio::test]
    async fn test_logout_clears_even_on_failure() {
        let auth = Arc::new(MockAuthApi::new(
            Ok(None),
            Err(FetchError::NonSuccessResponse {
                status: 502,
                body: "bad gateway".into(),
            }),
        ));
        let session = UserSession::new(Arc::clone(&auth) as Arc<dyn AuthApi>);
        session.set(Some(Principal::with_id(9)));

        let result = session.logout().await;

        assert!(result.is_err());
        assert_eq!(session.current(), None);
        assert_eq!(auth.logout_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let auth = Arc::new(MockAuthApi::new(Ok(None), Ok(())));
        let session = UserSession::new(auth);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = SessionProvider::subscribe(
            &session,
            Arc::new(move |p: &Option<Principal>| sink.lock().unwrap().push(p.clone())),
        );

        session.set(Some(Principal::with_id(2)));
        session.set(None);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some(Principal::with_id(2)), None]
        );
    }
}
