//! Account signup.
//!
//! The backend creates a student account and answers with tokens, but the
//! visitor is sent to the login page rather than signed in here, so a session
//! is only ever written by the login flow.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::types::{ErrorBody, RegisterRequest};

pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("missing email or password")]
    MissingInput,

    /// The backend refused the account (duplicate email, weak password, ...).
    #[error("signup rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("signup request failed: {0}")]
    Network(String),
}

impl SignupError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingInput => "Enter both email and password.".to_owned(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Network(_) => SIGNUP_FAILED_MESSAGE.to_owned(),
        }
    }
}

/// Trim the email and require both fields. The email doubles as the username.
///
/// # Errors
///
/// Returns `SignupError::MissingInput` when either field is blank.
pub fn validate_signup_input(email: &str, password: &str) -> Result<RegisterRequest, SignupError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(SignupError::MissingInput);
    }
    Ok(RegisterRequest { username: email.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// First readable message in a rejection body.
///
/// Accepts the `{"error": ...}` shapes and per-field validation errors such as
/// `{"email": ["user with this email already exists."]}`.
fn rejection_message(body: &str) -> Option<String> {
    if let Some(message) = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message().map(str::to_owned)) {
        return Some(message);
    }
    let fields: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body).ok()?;
    fields.values().find_map(|value| match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(|i| i.as_str().map(str::to_owned)),
        _ => None,
    })
}

/// Finish a signup attempt from the HTTP status and raw body.
///
/// # Errors
///
/// Returns `SignupError::Rejected` for a non-2xx status.
pub fn complete_signup(status: u16, body: &str) -> Result<(), SignupError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = rejection_message(body).unwrap_or_else(|| SIGNUP_FAILED_MESSAGE.to_owned());
    Err(SignupError::Rejected { status, message })
}
