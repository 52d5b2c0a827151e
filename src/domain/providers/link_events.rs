//! Provider trait for incoming deep-link events.

use async_trait::async_trait;
use tokio::sync::mpsc;
use url::Url;

/// Source of deep-link URIs delivered by the host platform.
///
/// Covers both halves of platform link delivery: the live stream of links
/// arriving while the app runs, and the one-shot "initial link" that
/// cold-started the app.
///
/// # Implementations
///
/// - [`crate::infrastructure::links::ChannelLinkSource`] - channel-backed
///   source for host applications to push URIs into
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkEventSource: Send + Sync {
    /// Opens a fresh stream of incoming link events.
    ///
    /// Each call returns a new receiver. Implementations must ensure a new
    /// subscription supersedes any earlier one, so that no two receivers see
    /// the same event.
    async fn subscribe(&self) -> mpsc::Receiver<Url>;

    /// The link that launched the app, if it was opened via a link.
    ///
    /// One-shot query, safe to call independent of [`Self::subscribe`].
    async fn initial_link(&self) -> Option<Url>;
}
