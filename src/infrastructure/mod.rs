//! Infrastructure layer: HTTP transport and host-integration providers.

pub mod http;
pub mod links;
pub mod referrer;
