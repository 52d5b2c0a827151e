//! DTOs for the install-confirmation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/referrals/confirm-install`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmInstallRequest {
    /// Attribution token or short-id being confirmed. Always sent under the
    /// `referrerToken` key; the backend accepts `shortId` as an alias.
    pub referrer_token: String,
    pub device_id: String,
}

/// Response body for a confirmed install (HTTP 200).
///
/// Fields beyond `success` are optional: older backend versions omit the
/// timestamp, and `deviceId` may be echoed back or not.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmInstallResponse {
    pub success: bool,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_camel_case() {
        let request = ConfirmInstallRequest {
            referrer_token: "TOK".to_string(),
            device_id: "device-1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "referrerToken": "TOK", "deviceId": "device-1" })
        );
    }

    #[test]
    fn test_response_with_all_fields() {
        let body = r#"{
            "success": true,
            "referralCode": "WELCOME10",
            "deviceId": "device-1",
            "confirmedAt": "2024-12-01T10:30:00Z"
        }"#;
        let response: ConfirmInstallResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.referral_code.unwrap(), "WELCOME10");
        assert_eq!(response.device_id.unwrap(), "device-1");
        assert!(response.confirmed_at.is_some());
    }

    #[test]
    fn test_response_without_timestamp() {
        let body = r#"{"success":true,"referralCode":"WELCOME10"}"#;
        let response: ConfirmInstallResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert!(response.confirmed_at.is_none());
        assert!(response.device_id.is_none());
    }
}
