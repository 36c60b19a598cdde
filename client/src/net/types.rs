//! Wire types for the authentication endpoints of the REST backend.
//!
//! The backend is loose about shapes: the role may sit at the top level or
//! under `user`, and entity ids arrive as strings or numbers. These types
//! accept both and normalize ids to strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// `POST /auth/login/` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User block nested in the login response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginUser {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// `POST /auth/login/` success body. Every field is optional on the wire;
/// presence is validated by the login flow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub consultancy_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub university_id: Option<String>,
}

impl LoginResponse {
    /// Role name as reported by the server, top-level first.
    #[must_use]
    pub fn reported_role(&self) -> Option<&str> {
        self.role
            .as_deref()
            .or_else(|| self.user.as_ref().and_then(|u| u.role.as_deref()))
            .filter(|r| !r.trim().is_empty())
    }
}

/// `POST /auth/token/refresh/` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// `POST /auth/token/refresh/` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub access: Option<String>,
}

/// `POST /auth/password-reset/request/` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetCodeRequest {
    pub email: String,
}

/// `POST /auth/password-reset/set/` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// `POST /auth/register/` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Error body shapes the backend uses (`detail` from the framework, `error`
/// and `message` from hand-written views).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// First non-empty message, preferring `message`, then `error`, then `detail`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        [&self.message, &self.error, &self.detail]
            .into_iter()
            .filter_map(Option::as_deref)
            .map(str::trim)
            .find(|m| !m.is_empty())
    }
}

/// Greeting returned by the backend's role-only endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RoleGreeting {
    #[serde(default)]
    pub message: String,
}

/// Accept `"42"`, `42`, or `null` for an id field.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
