//! No-op install-referrer provider.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::providers::InstallReferrerProvider;

/// An install-referrer provider that never yields a token.
///
/// Used on platforms without an install-referrer facility (everything other
/// than Android). With this provider wired in,
/// `confirm_install_if_possible` returns immediately without a network call.
pub struct NullInstallReferrer;

impl NullInstallReferrer {
    /// Creates a new NullInstallReferrer instance.
    pub fn new() -> Self {
        debug!("Using NullInstallReferrer (no install-referrer facility)");
        Self
    }
}

impl Default for NullInstallReferrer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InstallReferrerProvider for NullInstallReferrer {
    async fn referrer_token(&self) -> Option<String> {
        None
    }
}
