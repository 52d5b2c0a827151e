//! HTTP transport layer.
//!
//! Provides an [`HttpTransport`] trait with a production implementation:
//! - [`ReqwestTransport`] - Reqwest-backed client with default headers and
//!   a request timeout

mod reqwest_transport;
mod service;

pub use reqwest_transport::ReqwestTransport;
pub use service::{HttpError, HttpResponse, HttpResult, HttpTransport};

#[cfg(test)]
pub use service::MockHttpTransport;
