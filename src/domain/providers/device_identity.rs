//! Provider trait for the device identifier.

use async_trait::async_trait;

/// Opaque device-identifier provider.
///
/// Device identity is best-effort for the SDK: callers fall back to a
/// placeholder identifier when the provider fails or stalls, so
/// implementations may return errors freely.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceIdentityProvider: Send + Sync {
    /// Returns a stable identifier for this device.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform cannot produce an identifier.
    async fn device_id(&self) -> anyhow::Result<String>;
}
