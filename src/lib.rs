//! # ReferMe SDK
//!
//! A client SDK for the ReferMe referral and attribution backend: short
//! referral link generation, deep-link listening with attribution parameter
//! extraction, and best-effort install confirmation.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Value objects and collaborator traits
//! - **Application Layer** ([`application`]) - Attribution client and deep-link listener
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP transport and host-integration providers
//! - **API Layer** ([`api`]) - Wire request/response envelopes
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use referme_sdk::prelude::*;
//! use referme_sdk::infrastructure::http::ReqwestTransport;
//! use referme_sdk::infrastructure::referrer::NullInstallReferrer;
//!
//! let config = Config::from_env()?;
//! let transport = Arc::new(ReqwestTransport::new(&config)?);
//!
//! let service = AttributionService::new(
//!     &config,
//!     transport,
//!     Arc::new(my_device_identity),
//!     Arc::new(NullInstallReferrer::new()),
//! );
//!
//! let short_link = service.create_short_link("USER123").await?;
//! let confirmation = service.confirm_install_if_possible().await;
//! ```
//!
//! ## Deep Links
//!
//! The host application wires platform link delivery into a
//! [`ChannelLinkSource`](infrastructure::links::ChannelLinkSource) (or its
//! own [`LinkEventSource`](domain::providers::LinkEventSource)
//! implementation) and consumes events through
//! [`DeepLinkListener`](application::services::DeepLinkListener).
//!
//! ## Configuration
//!
//! Backend connection settings are loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;

pub use config::Config;
pub use error::SdkError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AttributionService, DeepLinkListener};
    pub use crate::config::Config;
    pub use crate::domain::entities::{InstallConfirmation, LinkParams, ParsedLink};
    pub use crate::error::SdkError;
    pub use crate::utils::token_resolver::{resolve_token, short_id};
}
