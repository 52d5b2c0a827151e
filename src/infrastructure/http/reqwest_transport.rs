//! Reqwest-backed HTTP transport.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use super::service::{HttpError, HttpResponse, HttpResult, HttpTransport};
use crate::config::Config;

/// Header carrying the backend API key.
const API_KEY_HEADER: &str = "X-API-Key";

/// Production transport built on [`reqwest::Client`].
///
/// Default headers (`Content-Type`, `X-API-Key`, optional `User-Agent`) and
/// the request timeout are baked into the client at construction, so every
/// request issued through this transport carries them.
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: std::time::Duration,
}

impl ReqwestTransport {
    /// Builds a transport from the SDK configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the API key or user agent contains characters
    /// that are not valid in an HTTP header, or when the underlying client
    /// cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let api_key = HeaderValue::from_str(&config.api_key)
            .context("API key is not a valid header value")?;
        headers.insert(API_KEY_HEADER, api_key);

        if let Some(user_agent) = &config.user_agent {
            let value = HeaderValue::from_str(user_agent)
                .context("User agent is not a valid header value")?;
            headers.insert(USER_AGENT, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.http_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            timeout: config.http_timeout,
        })
    }

    fn map_error(&self, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            HttpError::Timeout(self.timeout)
        } else {
            HttpError::RequestError(error.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> HttpResult<HttpResponse> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        Ok(HttpResponse { status, body })
    }
}
