//! Domain errors for the Cashtrack client.

use thiserror::Error;

/// Why a call to the remote API did not produce a usable result.
///
/// User-facing code collapses all of these into one message; the variants
/// are kept apart so logs can tell an expired session from an outage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never completed.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The server rejected the session.
    #[error("Authentication denied")]
    AuthenticationDenied,

    /// Any other non-2xx answer.
    #[error("Unexpected response status {status}: {body}")]
    NonSuccessResponse {
        /// HTTP status code
        status: u16,
        /// Trimmed response body
        body: String,
    },

    /// The body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short, stable label for structured logging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::AuthenticationDenied => "authentication_denied",
            Self::NonSuccessResponse { .. } => "non_success_response",
            Self::Decode(_) => "decode",
        }
    }
}

/// Result of a remote call.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors surfaced by the category and session services.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input rejected before any request was made.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// No principal is signed in.
    #[error("Not signed in")]
    NotSignedIn,

    /// The remote call failed.
    #[error(transparent)]
    Remote(#[from] FetchError),
}

/// Result of a service operation.
pub type DomainResult<T> = Result<T, DomainError>;
