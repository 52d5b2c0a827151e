#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use referme_sdk::application::services::AttributionService;
use referme_sdk::config::Config;
use referme_sdk::domain::providers::{DeviceIdentityProvider, InstallReferrerProvider};
use referme_sdk::infrastructure::http::ReqwestTransport;
use wiremock::MockServer;

/// Installs a log subscriber so `RUST_LOG=debug cargo test` shows SDK logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Device identity provider returning a fixed identifier.
pub struct FakeDeviceIdentity {
    pub id: String,
}

impl FakeDeviceIdentity {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

#[async_trait]
impl DeviceIdentityProvider for FakeDeviceIdentity {
    async fn device_id(&self) -> anyhow::Result<String> {
        Ok(self.id.clone())
    }
}

/// Device identity provider that always fails.
pub struct FailingDeviceIdentity;

#[async_trait]
impl DeviceIdentityProvider for FailingDeviceIdentity {
    async fn device_id(&self) -> anyhow::Result<String> {
        anyhow::bail!("device identity unavailable")
    }
}

/// Install referrer provider returning a fixed optional token.
pub struct FakeInstallReferrer {
    pub token: Option<String>,
}

impl FakeInstallReferrer {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    pub fn absent() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl InstallReferrerProvider for FakeInstallReferrer {
    async fn referrer_token(&self) -> Option<String> {
        self.token.clone()
    }
}

pub fn test_config(server: &MockServer) -> Config {
    Config::new(server.uri(), "test-api-key")
        .unwrap()
        .with_user_agent("referme-sdk-tests/0.1")
}

pub fn create_test_service<D, R>(
    server: &MockServer,
    device_identity: D,
    install_referrer: R,
) -> AttributionService<ReqwestTransport, D, R>
where
    D: DeviceIdentityProvider,
    R: InstallReferrerProvider,
{
    let config = test_config(server);
    let transport = Arc::new(ReqwestTransport::new(&config).unwrap());

    AttributionService::new(
        &config,
        transport,
        Arc::new(device_identity),
        Arc::new(install_referrer),
    )
}
