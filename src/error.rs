//! SDK error taxonomy.
//!
//! "Nothing to report" outcomes (no initial link, no install referrer, an
//! unconfirmed install) are `None` values, never errors. Errors are reserved
//! for operations that must fail loudly, i.e. short-link creation.

use thiserror::Error;

/// Errors surfaced by the SDK's remote operations.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The request never completed or the response was not usable: network
    /// failure, timeout, non-2xx status, or a body that failed to parse.
    ///
    /// `status` is `None` when no HTTP response was received at all. `body`
    /// carries the raw response text for diagnostics.
    #[error("transport failure (status {status:?}): {body}")]
    Transport { status: Option<u16>, body: String },

    /// A well-formed response that explicitly signals failure.
    #[error("api error: {message}")]
    Api { message: String },

    /// Input rejected before any request was sent.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Client-side failures that should not occur in practice, such as
    /// request serialization errors.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl SdkError {
    pub fn transport(status: Option<u16>, body: impl Into<String>) -> Self {
        Self::Transport {
            status,
            body: body.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
