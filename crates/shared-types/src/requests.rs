use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[serde(rename = "correo")]
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
    #[serde(rename = "rememberMe", default)]
    pub remember_me: bool,
}

#[cfg(feature = "validation")]
impl LoginRequest {
    /// Validate for form display. An empty map means the request is
    /// ready to submit.
    pub fn form_errors(&self) -> std::collections::HashMap<String, String> {
        match self.validate() {
            Ok(()) => std::collections::HashMap::new(),
            Err(errors) => field_errors(&errors),
        }
    }
}

/// Response envelope returned by the login endpoint.
///
/// `status` is the authoritative outcome flag; the backend reports some
/// rejections with an HTTP 2xx and `status: false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "extraData", default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<LoginExtraData>,
}

impl LoginResponse {
    /// The issued bearer token, if the response carries one.
    pub fn access_token(&self) -> Option<&str> {
        self.extra_data
            .as_ref()
            .and_then(|d| d.access_token.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// Extra payload attached to a successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginExtraData {
    #[serde(rename = "accessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Collapse `validator` output to one message per field for form display.
#[cfg(feature = "validation")]
pub fn field_errors(
    errors: &validator::ValidationErrors,
) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();
    for (field, errs) in errors.field_errors() {
        if let Some(first) = errs.first() {
            let msg = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            map.insert(field.to_string(), msg);
        }
    }
    map
}
