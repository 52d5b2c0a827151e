//! Wire request/response envelopes for the referral backend.

mod confirm;
mod referral;

pub use confirm::{ConfirmInstallRequest, ConfirmInstallResponse};
pub use referral::{CreateReferralRequest, CreateReferralResponse, ReferralData};
