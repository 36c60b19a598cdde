use super::*;

#[test]
fn signup_input_uses_email_as_username() {
    assert_eq!(
        validate_signup_input(" new@b.com ", "pw"),
        Ok(RegisterRequest {
            username: "new@b.com".to_owned(),
            email: "new@b.com".to_owned(),
            password: "pw".to_owned(),
        })
    );
    assert_eq!(validate_signup_input("", "pw"), Err(SignupError::MissingInput));
    assert_eq!(validate_signup_input("new@b.com", ""), Err(SignupError::MissingInput));
}

#[test]
fn accepted_signup_is_ok() {
    let body = r#"{"user":{"id":3,"email":"new@b.com","role":"student"},"access":"a","refresh":"r"}"#;
    assert_eq!(complete_signup(200, body), Ok(()));
    assert_eq!(complete_signup(201, "{}"), Ok(()));
}

#[test]
fn field_validation_error_is_shown() {
    let err = complete_signup(400, r#"{"username":["A user with that username already exists."]}"#).unwrap_err();
    assert_eq!(err.user_message(), "A user with that username already exists.");
    assert!(matches!(err, SignupError::Rejected { status: 400, .. }));
}

#[test]
fn error_field_wins_over_field_errors() {
    let err = complete_signup(400, r#"{"error":"Registration closed","email":["bad"]}"#).unwrap_err();
    assert_eq!(err.user_message(), "Registration closed");
}

#[test]
fn unreadable_rejection_falls_back_to_generic_message() {
    assert_eq!(complete_signup(500, "<html>oops</html>").unwrap_err().user_message(), SIGNUP_FAILED_MESSAGE);
    assert_eq!(complete_signup(400, r#"{"count":3}"#).unwrap_err().user_message(), SIGNUP_FAILED_MESSAGE);
    assert_eq!(SignupError::Network("offline".to_owned()).user_message(), SIGNUP_FAILED_MESSAGE);
}
