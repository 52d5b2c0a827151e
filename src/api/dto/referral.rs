//! DTOs for the short-link creation endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for referrer id validation.
static REFERRER_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request body for `POST /api/referrals`.
#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReferralRequest {
    /// Identifier of the referring user. Must be non-empty and URL-safe.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*REFERRER_ID_REGEX"))]
    pub referrer_id: String,
}

/// Response envelope for `POST /api/referrals`.
///
/// `data` is present on success; `message` carries the server's explanation
/// on a semantically-failed (`success: false`) response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReferralResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ReferralData>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of a successful creation response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralData {
    pub short_link: String,
}
