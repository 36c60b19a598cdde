use super::*;

#[test]
fn login_response_accepts_string_and_numeric_ids() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"access":"a","refresh":"r","consultancy_id":"42","university_id":7}"#).unwrap();
    assert_eq!(body.consultancy_id.as_deref(), Some("42"));
    assert_eq!(body.university_id.as_deref(), Some("7"));
}

#[test]
fn login_response_treats_null_and_blank_ids_as_absent() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"access":"a","consultancy_id":null,"university_id":"  "}"#).unwrap();
    assert_eq!(body.consultancy_id, None);
    assert_eq!(body.university_id, None);
}

#[test]
fn login_response_tolerates_missing_fields() {
    let body: LoginResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(body, LoginResponse::default());
}

#[test]
fn reported_role_prefers_top_level_then_user_block() {
    let nested: LoginResponse =
        serde_json::from_str(r#"{"access":"a","user":{"id":3,"email":"x@y.z","role":"university"}}"#).unwrap();
    assert_eq!(nested.reported_role(), Some("university"));
    assert_eq!(nested.user.as_ref().and_then(|u| u.id.as_deref()), Some("3"));

    let both: LoginResponse =
        serde_json::from_str(r#"{"access":"a","role":"admin","user":{"role":"student"}}"#).unwrap();
    assert_eq!(both.reported_role(), Some("admin"));

    let blank: LoginResponse = serde_json::from_str(r#"{"access":"a","role":" "}"#).unwrap();
    assert_eq!(blank.reported_role(), None);
}

#[test]
fn error_body_message_precedence() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"d","error":"Invalid credentials"}"#).unwrap();
    assert_eq!(body.message(), Some("Invalid credentials"));

    let detail_only: ErrorBody = serde_json::from_str(r#"{"detail":"No active account"}"#).unwrap();
    assert_eq!(detail_only.message(), Some("No active account"));

    let empty: ErrorBody = serde_json::from_str(r#"{"message":""}"#).unwrap();
    assert_eq!(empty.message(), None);
}

#[test]
fn login_request_serializes_credentials() {
    let req = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn set_password_request_uses_backend_field_names() {
    let request = SetPasswordRequest {
        email: "a@b.com".to_owned(),
        code: "123456".to_owned(),
        new_password: "s3cret".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({"email": "a@b.com", "code": "123456", "new_password": "s3cret"})
    );
}
