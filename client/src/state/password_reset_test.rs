use super::*;
use crate::util::storage::MemoryStorage;

fn started(email: &str) -> MemoryStorage {
    let storage = MemoryStorage::new();
    let request = validate_reset_request(email).unwrap();
    complete_reset_request(&storage, &request, 200, r#"{"message":"sent"}"#).unwrap();
    storage
}

#[test]
fn reset_request_trims_and_requires_email() {
    assert_eq!(validate_reset_request("  a@b.com "), Ok(ResetCodeRequest { email: "a@b.com".to_owned() }));
    assert_eq!(validate_reset_request("   "), Err(ResetError::MissingEmail));
}

#[test]
fn accepted_request_stores_email_for_later_steps() {
    let storage = started("a@b.com");
    assert_eq!(storage.get(RESET_EMAIL_KEY).as_deref(), Some("a@b.com"));
    assert_eq!(storage.get(RESET_CODE_KEY), None);
}

#[test]
fn rejected_request_stores_nothing_and_shows_server_error() {
    let storage = MemoryStorage::new();
    let request = validate_reset_request("nobody@b.com").unwrap();

    let err = complete_reset_request(&storage, &request, 404, r#"{"error":"User not found"}"#).unwrap_err();
    assert_eq!(err.user_message(), "User not found");
    assert!(storage.is_empty());

    let err = complete_reset_request(&storage, &request, 500, "<html></html>").unwrap_err();
    assert_eq!(err.user_message(), "Something went wrong");
}

#[test]
fn code_step_requires_a_started_reset() {
    let storage = MemoryStorage::new();
    assert_eq!(record_reset_code(&storage, "123456"), Err(ResetError::NotStarted));
    assert!(storage.is_empty());

    let storage = started("a@b.com");
    assert_eq!(record_reset_code(&storage, "  "), Err(ResetError::MissingCode));
    record_reset_code(&storage, " 123456 ").unwrap();
    assert_eq!(
        pending_reset(&storage),
        Some(PendingReset { email: "a@b.com".to_owned(), code: "123456".to_owned() })
    );
}

#[test]
fn new_password_must_match_confirmation() {
    let storage = started("a@b.com");
    record_reset_code(&storage, "123456").unwrap();

    assert_eq!(validate_new_password(&storage, "pw1", "pw2"), Err(ResetError::PasswordMismatch));
    assert_eq!(validate_new_password(&storage, "", ""), Err(ResetError::MissingPassword));
    assert_eq!(
        validate_new_password(&storage, "s3cret", "s3cret"),
        Ok(SetPasswordRequest {
            email: "a@b.com".to_owned(),
            code: "123456".to_owned(),
            new_password: "s3cret".to_owned(),
        })
    );
}

#[test]
fn set_step_without_code_is_not_started() {
    let storage = started("a@b.com");
    assert_eq!(pending_reset(&storage), None);
    assert_eq!(validate_new_password(&storage, "pw", "pw"), Err(ResetError::NotStarted));
}

#[test]
fn accepted_password_clears_reset_state() {
    let storage = started("a@b.com");
    record_reset_code(&storage, "123456").unwrap();

    complete_password_set(&storage, 200, r#"{"message":"ok"}"#).unwrap();
    assert!(storage.is_empty());
}

#[test]
fn rejected_password_keeps_state_for_retry() {
    let storage = started("a@b.com");
    record_reset_code(&storage, "000000").unwrap();

    let err = complete_password_set(&storage, 400, r#"{"error":"Invalid or expired code"}"#).unwrap_err();
    assert_eq!(err, ResetError::Rejected { status: 400, message: "Invalid or expired code".to_owned() });
    assert!(pending_reset(&storage).is_some());

    let err = complete_password_set(&storage, 400, "{}").unwrap_err();
    assert_eq!(err.user_message(), "Failed to reset password");
}

#[test]
fn new_request_discards_an_old_code() {
    let storage = started("a@b.com");
    record_reset_code(&storage, "111111").unwrap();

    let request = validate_reset_request("c@d.com").unwrap();
    complete_reset_request(&storage, &request, 200, "{}").unwrap();
    assert_eq!(storage.get(RESET_EMAIL_KEY).as_deref(), Some("c@d.com"));
    assert_eq!(pending_reset(&storage), None);
}
