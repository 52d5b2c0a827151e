//! SDK configuration.
//!
//! Configuration is built once and handed to the transport and services at
//! construction time. Host applications either construct it directly with
//! [`Config::new`] or load it from the environment with [`Config::from_env`].
//!
//! ## Environment Variables
//!
//! - `REFERME_API_URL` - Base URL of the referral backend (required)
//! - `REFERME_API_KEY` - API key sent as `X-API-Key` (required)
//! - `REFERME_USER_AGENT` - Optional `User-Agent` header value
//! - `REFERME_HTTP_TIMEOUT_SECONDS` - Request timeout (default: 15)
//!
//! A `.env` file in the working directory is honored via `dotenvy`.

use anyhow::{Context, Result, bail};
use std::env;
use std::time::Duration;
use url::Url;

/// Default timeout applied to every backend request.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for the referral backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend, without a trailing `/api` segment.
    pub base_url: String,
    /// API key sent with every request as `X-API-Key`.
    pub api_key: String,
    /// Optional `User-Agent` header value.
    pub user_agent: Option<String>,
    /// Timeout for each HTTP request. Exceeding it surfaces as a transport
    /// failure to the caller.
    pub http_timeout: Duration,
}

impl Config {
    /// Creates a configuration with the default timeout and no user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute HTTP(S) URL or the
    /// API key is empty.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let config = Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            user_agent: None,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the per-request HTTP timeout.
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `REFERME_API_URL` or `REFERME_API_KEY` is missing,
    /// or if the resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("REFERME_API_URL").context("REFERME_API_URL must be set")?;
        let api_key = env::var("REFERME_API_KEY").context("REFERME_API_KEY must be set")?;
        let user_agent = env::var("REFERME_USER_AGENT").ok().filter(|v| !v.is_empty());

        let http_timeout = env::var("REFERME_HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT);

        let config = Self {
            base_url,
            api_key,
            user_agent,
            http_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the base URL with any trailing slash removed.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid base URL: {}", self.base_url))?;

        match url.scheme() {
            "http" | "https" => {}
            other => bail!("Base URL must use http or https, got {other}"),
        }

        if self.api_key.is_empty() {
            bail!("API key must not be empty");
        }

        Ok(())
    }
}
