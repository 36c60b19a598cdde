//! Login flow: credential validation and turning a login response into a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login pages post credentials through `net::api::login`, then hand the
//! raw status and body here. This module decides the role, writes the token
//! store, and picks the dashboard to navigate to. Nothing is written unless
//! the response is a success carrying an access token.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends as a message on the form. A consultancy or university
//! login without its entity id still succeeds (with a console warning); the
//! dashboard then shows the session without an institution attached.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::{ErrorBody, LoginRequest, LoginResponse};
use crate::state::session::{Role, Session};
use crate::state::token_store::TokenStore;
use crate::util::route_access::dashboard_path;
use crate::util::storage::KeyValueStore;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const NETWORK_FAILURE_MESSAGE: &str = "Login failed. Please try again.";
pub const MISSING_INPUT_MESSAGE: &str = "Enter both email and password.";

/// Reasons a login attempt ends without a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Email or password left blank; no request was sent.
    #[error("missing email or password")]
    MissingInput,

    /// The backend answered with a non-success status.
    #[error("credentials rejected ({status}): {message}")]
    InvalidCredentials { status: u16, message: String },

    /// The request never produced a response.
    #[error("login request failed: {0}")]
    Network(String),

    /// A success response that was not JSON.
    #[error("malformed login response: {0}")]
    MalformedResponse(String),

    /// A success response without an access token.
    #[error("login response carried no access token")]
    MissingAccessToken,

    /// The response named a role this client does not know, or nothing
    /// (response or login page) determined one.
    #[error("unable to determine user role")]
    UnknownRole,
}

impl LoginError {
    /// Text shown under the login form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingInput => MISSING_INPUT_MESSAGE.to_owned(),
            Self::InvalidCredentials { message, .. } => message.clone(),
            Self::Network(_) => NETWORK_FAILURE_MESSAGE.to_owned(),
            Self::MalformedResponse(_) | Self::MissingAccessToken => {
                "Login failed: unexpected response from server.".to_owned()
            }
            Self::UnknownRole => "Unable to determine user role or type.".to_owned(),
        }
    }
}

/// Successful login: the stored session and where to go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session: Session,
    pub redirect: &'static str,
}

/// Trim the form fields and require both.
///
/// # Errors
///
/// Returns `LoginError::MissingInput` when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, LoginError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::MissingInput);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Pick the session role.
///
/// A role reported by the server is final: an unrecognized name yields no
/// role at all. Without one, the entity id in the response decides, and the
/// login page's role is the last resort.
fn resolve_role(body: &LoginResponse, portal: Option<Role>) -> Option<Role> {
    if let Some(reported) = body.reported_role() {
        let role = Role::parse(reported);
        if role.is_none() {
            leptos::logging::warn!("login: unrecognized role {reported:?} in response");
        }
        return role;
    }
    if body.consultancy_id.is_some() {
        Some(Role::Consultancy)
    } else if body.university_id.is_some() {
        Some(Role::University)
    } else {
        portal
    }
}

fn entity_id_for(role: Role, body: &LoginResponse) -> Option<String> {
    match role {
        Role::Consultancy => body.consultancy_id.clone(),
        Role::University => body.university_id.clone(),
        Role::Admin | Role::Student => None,
    }
}

/// Map a non-success response to the message shown on the form.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message().map(str::to_owned))
        .unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_owned())
}

/// Finish a login attempt from the HTTP status and raw body.
///
/// On success the token store holds exactly the new session.
///
/// # Errors
///
/// Returns a `LoginError` for non-2xx statuses, unparseable bodies, a missing
/// access token, or an undeterminable role. The store is untouched in every
/// error case.
pub fn complete_login<S: KeyValueStore>(
    store: &TokenStore<S>,
    portal: Option<Role>,
    status: u16,
    body: &str,
) -> Result<LoginOutcome, LoginError> {
    if !(200..300).contains(&status) {
        return Err(LoginError::InvalidCredentials { status, message: rejection_message(body) });
    }

    let parsed: LoginResponse =
        serde_json::from_str(body).map_err(|e| LoginError::MalformedResponse(e.to_string()))?;
    let access = parsed
        .access
        .clone()
        .filter(|t| !t.is_empty())
        .ok_or(LoginError::MissingAccessToken)?;
    let role = resolve_role(&parsed, portal).ok_or(LoginError::UnknownRole)?;

    if let Some(expected) = portal {
        if expected != role {
            leptos::logging::warn!("login: {expected} login page returned a {role} account");
        }
    }

    let session = Session::new(access, parsed.refresh.clone(), role, entity_id_for(role, &parsed));
    if session.missing_entity() {
        leptos::logging::warn!("login: {role} account has no {role}_id in response");
    }

    store.set_session(&session);
    Ok(LoginOutcome { redirect: dashboard_path(role), session })
}
