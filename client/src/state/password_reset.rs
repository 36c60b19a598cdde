//! Password reset: request a code by email, enter it, then set a new password.
//!
//! SYSTEM CONTEXT
//! ==============
//! The three reset pages are separate routes, so the email and the code are
//! carried between them in persisted storage (`resetEmail`, `resetCode`).
//! Both keys are removed once the backend accepts the new password. None of
//! this touches the session keys owned by `token_store`.

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod password_reset_test;

use crate::net::types::{ErrorBody, ResetCodeRequest, SetPasswordRequest};
use crate::util::storage::KeyValueStore;

pub const RESET_EMAIL_KEY: &str = "resetEmail";
pub const RESET_CODE_KEY: &str = "resetCode";

pub const REQUEST_RESET_PATH: &str = "/passreset/request";
pub const VERIFY_RESET_PATH: &str = "/passreset/verify";
pub const SET_PASSWORD_PATH: &str = "/passreset/set";

pub const CODE_SENT_MESSAGE: &str = "Code sent to your email";
pub const PASSWORD_RESET_MESSAGE: &str = "Password reset successfully. Redirecting to login...";

/// Reasons a reset step ends without moving on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResetError {
    #[error("missing email")]
    MissingEmail,

    #[error("missing reset code")]
    MissingCode,

    #[error("missing new password")]
    MissingPassword,

    #[error("passwords do not match")]
    PasswordMismatch,

    /// A later step was opened without the state an earlier step stores.
    #[error("no password reset in progress")]
    NotStarted,

    /// The backend answered with a non-success status.
    #[error("reset rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("reset request failed: {0}")]
    Network(String),
}

impl ResetError {
    /// Text shown on the reset form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingEmail => "Enter your email address.".to_owned(),
            Self::MissingCode => "Enter the code from your email.".to_owned(),
            Self::MissingPassword => "Enter a new password.".to_owned(),
            Self::PasswordMismatch => "Passwords do not match".to_owned(),
            Self::NotStarted => "Start by requesting a reset code.".to_owned(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Network(_) => "Something went wrong".to_owned(),
        }
    }
}

/// Email and code collected by the first two steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReset {
    pub email: String,
    pub code: String,
}

fn stored<S: KeyValueStore>(storage: &S, key: &str) -> Option<String> {
    storage.get(key).filter(|v| !v.trim().is_empty())
}

fn rejection(status: u16, body: &str, fallback: &str) -> ResetError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message().map(str::to_owned))
        .unwrap_or_else(|| fallback.to_owned());
    ResetError::Rejected { status, message }
}

/// Trim the email and require it.
///
/// # Errors
///
/// Returns `ResetError::MissingEmail` for a blank email.
pub fn validate_reset_request(email: &str) -> Result<ResetCodeRequest, ResetError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ResetError::MissingEmail);
    }
    Ok(ResetCodeRequest { email: email.to_owned() })
}

/// Finish the code request. On success the email is kept for the later steps.
///
/// # Errors
///
/// Returns `ResetError::Rejected` for a non-2xx status; nothing is stored.
pub fn complete_reset_request<S: KeyValueStore>(
    storage: &S,
    request: &ResetCodeRequest,
    status: u16,
    body: &str,
) -> Result<(), ResetError> {
    if !(200..300).contains(&status) {
        return Err(rejection(status, body, "Something went wrong"));
    }
    storage.remove(RESET_CODE_KEY);
    storage.set(RESET_EMAIL_KEY, &request.email);
    Ok(())
}

/// Keep the code the visitor typed for the final step.
///
/// # Errors
///
/// Returns `ResetError::NotStarted` when no email was stored by the request
/// step, or `ResetError::MissingCode` for a blank code.
pub fn record_reset_code<S: KeyValueStore>(storage: &S, code: &str) -> Result<(), ResetError> {
    if stored(storage, RESET_EMAIL_KEY).is_none() {
        return Err(ResetError::NotStarted);
    }
    let code = code.trim();
    if code.is_empty() {
        return Err(ResetError::MissingCode);
    }
    storage.set(RESET_CODE_KEY, code);
    Ok(())
}

/// The email and code stored by the earlier steps, if both are present.
pub fn pending_reset<S: KeyValueStore>(storage: &S) -> Option<PendingReset> {
    Some(PendingReset { email: stored(storage, RESET_EMAIL_KEY)?, code: stored(storage, RESET_CODE_KEY)? })
}

/// Build the set-password request from stored state and the two form fields.
///
/// # Errors
///
/// Returns `ResetError::NotStarted` without stored email and code,
/// `ResetError::MissingPassword` for an empty password, and
/// `ResetError::PasswordMismatch` when the confirmation differs.
pub fn validate_new_password<S: KeyValueStore>(
    storage: &S,
    new_password: &str,
    confirm: &str,
) -> Result<SetPasswordRequest, ResetError> {
    let pending = pending_reset(storage).ok_or(ResetError::NotStarted)?;
    if new_password.is_empty() {
        return Err(ResetError::MissingPassword);
    }
    if new_password != confirm {
        return Err(ResetError::PasswordMismatch);
    }
    Ok(SetPasswordRequest { email: pending.email, code: pending.code, new_password: new_password.to_owned() })
}

/// Finish the set-password step. On success the reset state is removed.
///
/// # Errors
///
/// Returns `ResetError::Rejected` for a non-2xx status; the stored email and
/// code stay so the visitor can retry.
pub fn complete_password_set<S: KeyValueStore>(storage: &S, status: u16, body: &str) -> Result<(), ResetError> {
    if !(200..300).contains(&status) {
        return Err(rejection(status, body, "Failed to reset password"));
    }
    storage.remove(RESET_EMAIL_KEY);
    storage.remove(RESET_CODE_KEY);
    Ok(())
}
