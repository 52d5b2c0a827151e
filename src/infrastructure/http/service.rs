//! HTTP transport trait and error types.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Errors that can occur at the transport level.
#[derive(Debug)]
pub enum HttpError {
    /// The request failed before a response was received.
    RequestError(String),
    /// The request exceeded the configured timeout.
    Timeout(Duration),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RequestError(e) => write!(f, "HTTP request error: {}", e),
            Self::Timeout(d) => write!(f, "HTTP request timed out after {:?}", d),
        }
    }
}

impl std::error::Error for HttpError {}

/// Result type for transport operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// A raw HTTP response: status code plus body text.
///
/// The body is kept as a string regardless of status so callers can attach
/// it to diagnostics when parsing fails.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Returns true for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Generic JSON-POST capability against the referral backend.
///
/// Implementations own connection setup, default headers, and the request
/// timeout. A non-2xx status is a normal response here, not an error; errors
/// are reserved for requests that never completed.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestTransport`] - production client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POSTs a JSON body to an absolute URL and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::RequestError`] on connection failure and
    /// [`HttpError::Timeout`] when the configured deadline is exceeded.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> HttpResult<HttpResponse>;
}
