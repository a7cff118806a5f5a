//! Connect-protocol adapter for `api.v1.AuthService`.
//!
//! Unary Connect calls are plain JSON POSTs to `/<service>/<method>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

use crate::domain::errors::FetchResult;
use crate::domain::models::Principal;
use crate::domain::ports::AuthApi;
use crate::infrastructure::http::ApiClient;

const AUTH_SERVICE: &str = "/api.v1.AuthService";

#[derive(Debug, Serialize)]
struct Empty {}

#[derive(Debug, Default, Deserialize)]
struct MeResponse {
    #[serde(default)]
    user: Option<Principal>,
}

#[derive(Debug, Default, Deserialize)]
struct LogoutResponse {}

/// Auth service over the Connect JSON protocol.
pub struct ConnectAuthApi {
    client: Arc<ApiClient>,
}

impl ConnectAuthApi {
    /// Auth API over the shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for ConnectAuthApi {
    #[instrument(skip(self))]
    async fn me(&self) -> FetchResult<Option<Principal>> {
        let response: MeResponse = self
            .client
            .post_json(&format!("{AUTH_SERVICE}/Me"), &Empty {})
            .await?;
        Ok(response.user)
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> FetchResult<()> {
        let _: LogoutResponse = self
            .client
            .post_json(&format!("{AUTH_SERVICE}/Logout"), &Empty {})
            .await?;
        Ok(())
    }
}
