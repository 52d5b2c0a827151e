//! Short-link creation and install-confirmation service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};
use validator::Validate;

use crate::api::dto::{
    ConfirmInstallRequest, ConfirmInstallResponse, CreateReferralRequest, CreateReferralResponse,
};
use crate::config::Config;
use crate::domain::entities::InstallConfirmation;
use crate::domain::providers::{DeviceIdentityProvider, InstallReferrerProvider};
use crate::error::SdkError;
use crate::infrastructure::http::HttpTransport;

/// Upper bound on the device-identity lookup. The provider is best-effort
/// and must never stall a confirmation.
const DEVICE_ID_TIMEOUT: Duration = Duration::from_secs(5);

/// Placeholder identifier used when the device-identity provider fails.
const FALLBACK_DEVICE_ID: &str = "unknown-device";

/// Client for the referral backend.
///
/// Short-link creation fails loudly with an [`SdkError`] since it is a
/// user-initiated action that needs feedback. Install confirmation is an
/// opportunistic background action retried on the next app start, so every
/// failure there folds into `None`.
///
/// Collaborators are injected at construction; there is no global state, and
/// overlapping calls run independently (the backend deduplicates repeat
/// confirmations for the same device/token pair).
pub struct AttributionService<T, D, R>
where
    T: HttpTransport,
    D: DeviceIdentityProvider,
    R: InstallReferrerProvider,
{
    transport: Arc<T>,
    device_identity: Arc<D>,
    install_referrer: Arc<R>,
    base_url: String,
}

impl<T, D, R> AttributionService<T, D, R>
where
    T: HttpTransport,
    D: DeviceIdentityProvider,
    R: InstallReferrerProvider,
{
    /// Creates a new attribution service.
    pub fn new(
        config: &Config,
        transport: Arc<T>,
        device_identity: Arc<D>,
        install_referrer: Arc<R>,
    ) -> Self {
        Self {
            transport,
            device_identity,
            install_referrer,
            base_url: config.base_url_trimmed().to_string(),
        }
    }

    /// Creates a short referral link for the given referrer.
    ///
    /// # Errors
    ///
    /// - [`SdkError::Validation`] if the referrer id is empty or not URL-safe
    /// - [`SdkError::Api`] if the backend returns a well-formed failure
    ///   response (carries the server message)
    /// - [`SdkError::Transport`] on network failure, non-2xx status, or a
    ///   malformed response body (carries status and raw body)
    pub async fn create_short_link(&self, referrer_id: &str) -> Result<String, SdkError> {
        let request = CreateReferralRequest {
            referrer_id: referrer_id.to_string(),
        };
        request
            .validate()
            .map_err(|e| SdkError::validation(format!("Invalid referrer id: {e}")))?;

        let url = format!("{}/api/referrals", self.base_url);
        let body = to_body(&request)?;

        let response = self
            .transport
            .post_json(&url, &body)
            .await
            .map_err(|e| SdkError::transport(None, e.to_string()))?;

        if !response.is_success() {
            return Err(SdkError::transport(Some(response.status), response.body));
        }

        let parsed: CreateReferralResponse = serde_json::from_str(&response.body)
            .map_err(|_| SdkError::transport(Some(response.status), response.body.clone()))?;

        if !parsed.success {
            let message = parsed
                .message
                .unwrap_or_else(|| "Backend signaled failure without a message".to_string());
            return Err(SdkError::api(message));
        }

        parsed
            .data
            .map(|data| data.short_link)
            .ok_or_else(|| SdkError::transport(Some(response.status), response.body))
    }

    /// Confirms an install for the given attribution token or short-id.
    ///
    /// Best-effort by design: transport failures, non-200 statuses, and
    /// malformed bodies all fold into `None` with a log line, since the
    /// caller retries on the next app start. An empty token short-circuits
    /// without a network call.
    pub async fn confirm_install(&self, token: &str) -> Option<InstallConfirmation> {
        if token.is_empty() {
            debug!("Skipping install confirmation, empty token");
            return None;
        }

        let device_id = self.resolve_device_id().await;
        let request = ConfirmInstallRequest {
            referrer_token: token.to_string(),
            device_id: device_id.clone(),
        };
        let body = match to_body(&request) {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, "Failed to build confirm-install request");
                return None;
            }
        };

        let url = format!("{}/api/referrals/confirm-install", self.base_url);
        let response = match self.transport.post_json(&url, &body).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "Install confirmation transport failure");
                return None;
            }
        };

        if response.status != 200 {
            debug!(status = response.status, "Install not confirmed");
            return None;
        }

        let parsed: ConfirmInstallResponse = match serde_json::from_str(&response.body) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(%error, "Malformed install confirmation response");
                return None;
            }
        };

        if !parsed.success {
            debug!("Backend declined install confirmation");
            return None;
        }

        Some(InstallConfirmation {
            referral_code: parsed.referral_code.unwrap_or_default(),
            device_id: parsed.device_id.unwrap_or(device_id),
            confirmed_at: parsed.confirmed_at,
        })
    }

    /// Confirms an install when the platform captured an install referrer.
    ///
    /// Returns `None` immediately, without a network call, when the provider
    /// yields nothing. Safe to call on every cold start; the backend
    /// deduplicates repeat confirmations.
    pub async fn confirm_install_if_possible(&self) -> Option<InstallConfirmation> {
        let token = self.install_referrer.referrer_token().await?;
        if token.is_empty() {
            debug!("Install referrer yielded an empty token");
            return None;
        }

        self.confirm_install(&token).await
    }

    /// Resolves the device identifier, falling back to a placeholder.
    ///
    /// The provider call is bounded by [`DEVICE_ID_TIMEOUT`].
    async fn resolve_device_id(&self) -> String {
        match tokio::time::timeout(DEVICE_ID_TIMEOUT, self.device_identity.device_id()).await {
            Ok(Ok(device_id)) if !device_id.is_empty() => device_id,
            Ok(Ok(_)) => {
                warn!("Device identity provider returned an empty id");
                FALLBACK_DEVICE_ID.to_string()
            }
            Ok(Err(error)) => {
                warn!(%error, "Device identity provider failed");
                FALLBACK_DEVICE_ID.to_string()
            }
            Err(_) => {
                warn!(timeout = ?DEVICE_ID_TIMEOUT, "Device identity provider timed out");
                FALLBACK_DEVICE_ID.to_string()
            }
        }
    }
}

fn to_body<B: serde::Serialize>(request: &B) -> Result<Value, SdkError> {
    serde_json::to_value(request)
        .map_err(|e| SdkError::internal(format!("Request serialization failed: {e}")))
}
