//! Collaborator interfaces supplied by the host application.

mod device_identity;
mod install_referrer;
mod link_events;

pub use device_identity::DeviceIdentityProvider;
pub use install_referrer::InstallReferrerProvider;
pub use link_events::LinkEventSource;

#[cfg(test)]
pub use device_identity::MockDeviceIdentityProvider;
#[cfg(test)]
pub use install_referrer::MockInstallReferrerProvider;
#[cfg(test)]
pub use link_events::MockLinkEventSource;
