//! Install-referrer provider implementations.

mod null_referrer;

pub use null_referrer::NullInstallReferrer;
