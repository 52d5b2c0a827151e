//! Attribution token resolution from extracted link parameters.

use crate::domain::entities::LinkParams;

/// Candidate keys for the attribution token, highest priority first.
pub const TOKEN_KEYS: [&str; 5] = ["uid", "ref", "code", "token", "referral"];

/// Resolves the attribution token from a parameter map.
///
/// Checks [`TOKEN_KEYS`] in order and returns the first present non-empty
/// value. An empty value is treated the same as an absent key, so the result
/// is never an empty string.
///
/// # Examples
///
/// ```ignore
/// let token = resolve_token(&params);
/// assert_eq!(token.as_deref(), Some("ABC123"));
/// ```
pub fn resolve_token(params: &LinkParams) -> Option<String> {
    TOKEN_KEYS
        .iter()
        .find_map(|key| params.get(*key).filter(|value| !value.is_empty()).cloned())
}

/// Resolves the short-id from the first path segment.
///
/// The narrow counterpart to [`resolve_token`], used by the token-only
/// listening path: it reads `segment_0` specifically and ignores the
/// candidate-key fallback entirely. Callers choose one resolver or the other
/// explicitly.
pub fn short_id(params: &LinkParams) -> Option<String> {
    params
        .get("segment_0")
        .filter(|value| !value.is_empty())
        .cloned()
}
