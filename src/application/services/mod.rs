//! Application services.

mod attribution_service;
mod deep_link_listener;

pub use attribution_service::AttributionService;
pub use deep_link_listener::DeepLinkListener;
