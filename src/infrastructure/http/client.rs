//! HTTP client for the Cashtrack API.

use reqwest::{header, Client as ReqwestClient, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::errors::ApiError;
use super::url::{is_absolute_url, resolve_api_url};
use crate::domain::models::ApiConfig;

/// Configuration for the API HTTP client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Absolute base URL of the API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Session cookie name
    pub session_cookie_name: String,

    /// Session token, sent as the session cookie when present
    pub session_token: Option<String>,
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
            session_cookie_name: config.session_cookie_name.clone(),
            session_token: config.session_token.clone(),
        }
    }
}

/// Thin JSON-over-HTTP client shared by the API adapters
///
/// Attaches the session cookie to every request and turns non-2xx
/// responses into classified [`ApiError`]s.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: ReqwestClient,
    base_url: String,
    session_cookie: Option<String>,
}

impl ApiClient {
    /// Build a client. The base URL must be absolute.
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        if !is_absolute_url(&config.base_url) || Url::parse(&config.base_url).is_err() {
            return Err(ApiError::InvalidBaseUrl(config.base_url));
        }

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .build()?;

        let session_cookie = config
            .session_token
            .filter(|token| !token.is_empty())
            .map(|token| format!("{}={}", config.session_cookie_name, token));

        Ok(Self {
            http_client,
            base_url: config.base_url,
            session_cookie,
        })
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        let resolved = resolve_api_url(&self.base_url, path);
        Url::parse(&resolved).map_err(|_| ApiError::InvalidBaseUrl(resolved))
    }

    /// GET and decode a JSON body
    #[instrument(skip(self), err)]
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let request = self.http_client.get(self.url(path)?);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// POST a JSON body and decode the JSON answer
    #[instrument(skip(self, body), err)]
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.http_client.post(self.url(path)?).json(body);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// PATCH with a JSON body, ignoring any response body
    #[instrument(skip(self, body), err)]
    pub async fn patch_json<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = self.http_client.patch(self.url(path)?).json(body);
        self.send(request).await?;
        Ok(())
    }

    /// DELETE, ignoring any response body
    #[instrument(skip(self), err)]
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.http_client.delete(self.url(path)?);
        self.send(request).await?;
        Ok(())
    }

    /// Attach the session, send, and check the status
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match &self.session_cookie {
            Some(cookie) => request.header(header::COOKIE, cookie),
            None => request,
        };

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::NetworkError(err)
            }
        })?;

        let status = response.status();
        debug!(%status, url = %response.url(), "response received");

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        warn!(%status, body = %body, "API error");
        Err(ApiError::from_status(status, body.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiClientConfig {
        ApiClientConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            session_cookie_name: "cashtrack_session".to_string(),
            session_token: Some("abc".to_string()),
        }
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let result = ApiClient::new(config("/"));
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_url_resolution() {
        let client = ApiClient::new(config("http://localhost:8080")).unwrap();
        assert_eq!(
            client.url("/api/categories/3").unwrap().as_str(),
            "http://localhost:8080/api/categories/3"
        );
    }
}
