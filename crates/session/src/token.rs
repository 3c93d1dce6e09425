use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use shared_types::UserId;

use crate::errors::DecodeError;

/// Claims carried in the bearer token payload.
///
/// Only the fields this client consumes are declared; any other claims
/// in the payload are ignored on decode.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject: the account email.
    pub sub: String,
    #[serde(rename = "usuarioId")]
    pub user_id: UserId,
    /// Role names in grant order; the first entry is authoritative.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// The authoritative role name, when at least one role was granted.
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}

/// Decode the payload segment of a dot-separated bearer token.
///
/// The signature is deliberately not verified: tokens arrive from the
/// trusted auth backend and this client only reads the payload. Padded
/// and unpadded base64url are both accepted.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let mut segments = token.split('.');
    let _header = segments.next();
    let payload = match segments.next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => return Err(DecodeError::MissingPayload),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| DecodeError::Base64)?;
    let text = String::from_utf8(bytes).map_err(|_| DecodeError::Utf8)?;
    serde_json::from_str(&text).map_err(|_| DecodeError::Json)
}
