use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::FetchError;

/// Errors that can occur when talking to the Cashtrack API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or expired session (HTTP 401)
    #[error("Not authenticated")]
    Unauthorized,

    /// Forbidden - permission denied (HTTP 403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// Invalid request parameters (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Server error (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Network or connection error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Base URL cannot be used to build request URLs
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Unknown or unexpected status
    #[error("Unexpected status ({0}): {1}")]
    UnexpectedStatus(StatusCode, String),
}

impl ApiError {
    /// Classify a non-success response
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::InvalidRequest(body),
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            StatusCode::NOT_FOUND => Self::NotFound,
            status if status.is_server_error() => Self::ServerError(status, body),
            _ => Self::UnexpectedStatus(status, body),
        }
    }
}

impl From<ApiError> for FetchError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::AuthenticationDenied,
            ApiError::NetworkError(e) if e.is_decode() => Self::Decode(e.to_string()),
            ApiError::NetworkError(e) => Self::Transport(e.to_string()),
            ApiError::Timeout => Self::Transport("request timed out".to_string()),
            ApiError::InvalidBaseUrl(url) => Self::Transport(format!("invalid base URL: {url}")),
            ApiError::NotFound => Self::NonSuccessResponse {
                status: StatusCode::NOT_FOUND.as_u16(),
                body: String::new(),
            },
            ApiError::Forbidden(body) => Self::NonSuccessResponse {
                status: StatusCode::FORBIDDEN.as_u16(),
                body,
            },
            ApiError::InvalidRequest(body) => Self::NonSuccessResponse {
                status: StatusCode::BAD_REQUEST.as_u16(),
                body,
            },
            ApiError::ServerError(status, body) | ApiError::UnexpectedStatus(status, body) => {
                Self::NonSuccessResponse {
                    status: status.as_u16(),
                    body,
                }
            }
        }
    }
}
