//! Channel-backed link event source for host applications.

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};
use url::Url;

use crate::domain::providers::LinkEventSource;

/// Default buffer size for the event channel.
const DEFAULT_CAPACITY: usize = 64;

/// A [`LinkEventSource`] fed by the host application.
///
/// The host pushes every URI the platform delivers through [`Self::publish`];
/// the SDK side consumes them via the listener. Each [`subscribe`] call
/// replaces the stored sender, so a superseded receiver's stream simply ends
/// and no event is ever delivered twice.
///
/// [`subscribe`]: LinkEventSource::subscribe
pub struct ChannelLinkSource {
    initial: Option<Url>,
    capacity: usize,
    subscriber: Mutex<Option<mpsc::Sender<Url>>>,
}

impl ChannelLinkSource {
    /// Creates a source with no initial link.
    pub fn new() -> Self {
        Self {
            initial: None,
            capacity: DEFAULT_CAPACITY,
            subscriber: Mutex::new(None),
        }
    }

    /// Creates a source that reports `initial` as the cold-start link.
    pub fn with_initial_link(initial: Url) -> Self {
        Self {
            initial: Some(initial),
            capacity: DEFAULT_CAPACITY,
            subscriber: Mutex::new(None),
        }
    }

    /// Delivers a link event to the current subscriber.
    ///
    /// Returns `true` if the event was handed to a live subscription. Events
    /// published with no active subscriber, or after the subscriber dropped
    /// its receiver, are discarded with a log line.
    pub async fn publish(&self, url: Url) -> bool {
        let guard = self.subscriber.lock().await;
        match guard.as_ref() {
            Some(sender) => {
                if sender.send(url.clone()).await.is_ok() {
                    true
                } else {
                    tracing::debug!(%url, "link event dropped, subscriber gone");
                    false
                }
            }
            None => {
                tracing::debug!(%url, "link event dropped, no subscriber");
                false
            }
        }
    }
}

impl Default for ChannelLinkSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkEventSource for ChannelLinkSource {
    async fn subscribe(&self) -> mpsc::Receiver<Url> {
        let (sender, receiver) = mpsc::channel(self.capacity);
        *self.subscriber.lock().await = Some(sender);
        receiver
    }

    async fn initial_link(&self) -> Option<Url> {
        self.initial.clone()
    }
}
