//! Install confirmation entity returned by the confirm-install flow.

use chrono::{DateTime, Utc};

/// A confirmed install attribution.
///
/// Created per confirm-install call and handed to the caller; the SDK does
/// not persist it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfirmation {
    /// Referral code issued by the backend for this install.
    pub referral_code: String,
    /// Device identifier the confirmation was recorded against.
    pub device_id: String,
    /// Server-side confirmation time, when the backend returns one.
    pub confirmed_at: Option<DateTime<Utc>>,
}
