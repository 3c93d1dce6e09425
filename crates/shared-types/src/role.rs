use serde::{Deserialize, Serialize};

/// Role assigned to an authenticated user, as issued by the auth backend.
///
/// - `Administrator`: platform administration (accounts and role grants).
/// - `Organizer`: owns events and issues their certificates.
/// - `Participant`: enrolls in events and collects certificates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Role {
    Administrator,
    Organizer,
    Participant,
}

impl Role {
    /// Parse a role name as the backend spells it. Matching is
    /// case-insensitive and ignores surrounding whitespace; unknown
    /// names return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ADMINISTRADOR" => Some(Role::Administrator),
            "ORGANIZADOR" => Some(Role::Organizer),
            "PARTICIPANTE" => Some(Role::Participant),
            _ => None,
        }
    }

    /// Canonical wire spelling for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "ADMINISTRADOR",
            Role::Organizer => "ORGANIZADOR",
            Role::Participant => "PARTICIPANTE",
        }
    }

    /// Human-readable label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Organizer => "Organizer",
            Role::Participant => "Participant",
        }
    }
}
