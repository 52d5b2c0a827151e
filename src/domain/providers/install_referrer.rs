//! Provider trait for the platform install referrer.

use async_trait::async_trait;

/// Opaque, optionally-absent install-referrer token provider.
///
/// Platforms with an install-referrer facility (Android) return the captured
/// token; everything else uses
/// [`crate::infrastructure::referrer::NullInstallReferrer`]. The core never
/// inspects platform identity itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InstallReferrerProvider: Send + Sync {
    /// Returns the install-referrer token captured at install time, if any.
    async fn referrer_token(&self) -> Option<String>;
}
