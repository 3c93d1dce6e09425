use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier as issued by the auth backend.
///
/// Tokens in the wild carry it both as a JSON number and as a string.
/// Whichever form arrives is preserved so the persisted entry
/// re-serializes exactly as it was received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UserId {
    Num(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Num(n) => write!(f, "{}", n),
            UserId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Role record nested inside the persisted user entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleName {
    pub nombre_rol: String,
}

/// Authenticated user view model, persisted alongside the token and
/// adopted verbatim on session restore.
///
/// Field names and nesting reproduce the stored JSON layout:
/// `{"correo": ..., "usuarioId": ..., "rol": {"nombre_rol": ...}}`.
/// Deserialization is strict; an entry missing any field is treated
/// as corrupt by the session layer and cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "usuarioId")]
    pub user_id: UserId,
    #[serde(rename = "rol")]
    pub role: RoleName,
}

impl SessionUser {
    pub fn new(email: impl Into<String>, user_id: UserId, role_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            user_id,
            role: RoleName {
                nombre_rol: role_name.into(),
            },
        }
    }

    /// The raw role name exactly as the backend issued it.
    pub fn role_name(&self) -> &str {
        &self.role.nombre_rol
    }
}
