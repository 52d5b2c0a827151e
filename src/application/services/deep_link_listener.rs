//! Deep-link subscription and dispatch.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::entities::{LinkParams, ParsedLink};
use crate::domain::providers::LinkEventSource;
use crate::utils::token_resolver::{resolve_token, short_id};

/// Listens for incoming deep links and dispatches them to a handler.
///
/// At most one subscription is active per listener: a new [`Self::listen`]
/// call cancels the previous subscription before establishing its own, so
/// there are never two concurrent dispatch paths. Events are dispatched in
/// delivery order, one handler call per event.
///
/// Handler errors are logged and never tear down the subscription; the
/// listener keeps draining the stream until it closes or [`Self::dispose`]
/// is called.
pub struct DeepLinkListener<L: LinkEventSource> {
    events: Arc<L>,
    active: Mutex<Option<JoinHandle<()>>>,
}

impl<L: LinkEventSource> DeepLinkListener<L> {
    /// Creates a listener over the given link event source.
    pub fn new(events: Arc<L>) -> Self {
        Self {
            events,
            active: Mutex::new(None),
        }
    }

    /// Subscribes to incoming links, invoking `handler` with the extracted
    /// parameter map for each one.
    ///
    /// Supersedes any previously active subscription. A failing handler does
    /// not stop dispatch of later events.
    pub async fn listen<F>(&self, mut handler: F)
    where
        F: FnMut(LinkParams) -> anyhow::Result<()> + Send + 'static,
    {
        let mut slot = self.active.lock().await;
        if let Some(previous) = slot.take() {
            previous.abort();
            debug!("Superseded previous deep link subscription");
        }

        let mut receiver = self.events.subscribe().await;
        let task = tokio::spawn(async move {
            while let Some(url) = receiver.recv().await {
                debug!(%url, "Deep link received");
                let params = ParsedLink::from_url(&url).params();
                if let Err(error) = handler(params) {
                    warn!(%url, %error, "Deep link handler failed");
                }
            }
            debug!("Deep link stream closed");
        });
        *slot = Some(task);
    }

    /// Token-only convenience built on [`Self::listen`].
    ///
    /// Extracts the first path segment as the short-id and hands it to the
    /// handler. When the link has no first segment the handler receives an
    /// empty string, not an absent value; callers must tolerate it.
    pub async fn listen_for_token<F>(&self, mut handler: F)
    where
        F: FnMut(String) -> anyhow::Result<()> + Send + 'static,
    {
        self.listen(move |params| handler(short_id(&params).unwrap_or_default()))
            .await;
    }

    /// Returns the parameters of the link that launched the app, if any.
    ///
    /// One-shot query; safe to call before or after [`Self::listen`].
    pub async fn initial_link(&self) -> Option<LinkParams> {
        let url = self.events.initial_link().await?;
        Some(ParsedLink::from_url(&url).params())
    }

    /// Resolves the attribution token from the launch link, if any.
    ///
    /// Applies the full candidate-key fallback, unlike the token-only
    /// listening path.
    pub async fn initial_token(&self) -> Option<String> {
        let params = self.initial_link().await?;
        resolve_token(&params)
    }

    /// Cancels the active subscription, if any. Idempotent.
    ///
    /// In-flight backend calls are not affected; only link dispatch stops.
    pub async fn dispose(&self) {
        if let Some(task) = self.active.lock().await.take() {
            task.abort();
            debug!("Deep link subscription disposed");
        }
    }
}
