//! Session identity model: role, owning entity, and the session record.
//!
//! DESIGN
//! ======
//! A `Session` value can only be built with an access token and a role, so
//! "logged out" is always `Option::<Session>::None` rather than a half-filled
//! record. Owning-entity ids are tied to the role that owns them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

/// Closed set of account roles. Access checks are exact allow-list matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Consultancy,
    University,
    Student,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Consultancy, Role::University, Role::Student];

    /// Wire/storage name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Consultancy => "consultancy",
            Self::University => "university",
            Self::Student => "student",
        }
    }

    /// Human label for headings and buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Consultancy => "Consultancy",
            Self::University => "University",
            Self::Student => "Student",
        }
    }

    /// Parse a stored or server-provided role name. Unrecognized values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "consultancy" => Ok(Self::Consultancy),
            "university" => Ok(Self::University),
            "student" => Ok(Self::Student),
            _ => Err(UnknownRole(s.to_owned())),
        }
    }
}

/// The single institution record a non-admin account manages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OwningEntity {
    Consultancy(String),
    University(String),
}

impl OwningEntity {
    /// Build the entity slot matching `role`. Admin and student own nothing.
    #[must_use]
    pub fn for_role(role: Role, id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return None;
        }
        match role {
            Role::Consultancy => Some(Self::Consultancy(id)),
            Role::University => Some(Self::University(id)),
            Role::Admin | Role::Student => None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Consultancy(id) | Self::University(id) => id,
        }
    }

    /// Role that is allowed to own this kind of entity.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Consultancy(_) => Role::Consultancy,
            Self::University(_) => Role::University,
        }
    }
}

/// Client-held record of a logged-in identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub role: Role,
    pub entity: Option<OwningEntity>,
}

impl Session {
    /// Build a session, routing `entity_id` into the slot owned by `role`.
    ///
    /// An entity id supplied for a role that owns nothing is dropped.
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        role: Role,
        entity_id: Option<String>,
    ) -> Self {
        let entity = entity_id.and_then(|id| OwningEntity::for_role(role, id));
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.filter(|t| !t.is_empty()),
            role,
            entity,
        }
    }

    #[must_use]
    pub fn entity_id(&self) -> Option<&str> {
        self.entity.as_ref().map(OwningEntity::id)
    }

    /// True when the role expects an owning entity but none was recorded.
    #[must_use]
    pub fn missing_entity(&self) -> bool {
        matches!(self.role, Role::Consultancy | Role::University) && self.entity.is_none()
    }
}
