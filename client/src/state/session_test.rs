use super::*;

#[test]
fn role_parses_case_insensitively_and_trims() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("  Consultancy "), Some(Role::Consultancy));
    assert_eq!(Role::parse("UNIVERSITY"), Some(Role::University));
    assert_eq!(Role::parse("student"), Some(Role::Student));
}

#[test]
fn role_rejects_unknown_names() {
    assert_eq!(Role::parse("college"), None);
    assert_eq!(Role::parse(""), None);
    assert_eq!("superuser".parse::<Role>(), Err(UnknownRole("superuser".to_owned())));
}

#[test]
fn role_round_trips_through_wire_name() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
        assert_eq!(role.to_string(), role.as_str());
    }
}

#[test]
fn role_serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_value(Role::University).unwrap(), serde_json::json!("university"));
    let parsed: Role = serde_json::from_value(serde_json::json!("consultancy")).unwrap();
    assert_eq!(parsed, Role::Consultancy);
}

#[test]
fn owning_entity_only_exists_for_institution_roles() {
    assert_eq!(
        OwningEntity::for_role(Role::Consultancy, "42"),
        Some(OwningEntity::Consultancy("42".to_owned()))
    );
    assert_eq!(
        OwningEntity::for_role(Role::University, "7"),
        Some(OwningEntity::University("7".to_owned()))
    );
    assert_eq!(OwningEntity::for_role(Role::Admin, "1"), None);
    assert_eq!(OwningEntity::for_role(Role::Student, "1"), None);
    assert_eq!(OwningEntity::for_role(Role::Consultancy, "  "), None);
}

#[test]
fn session_new_routes_entity_id_by_role() {
    let session = Session::new("abc", Some("def".to_owned()), Role::Consultancy, Some("42".to_owned()));
    assert_eq!(session.entity, Some(OwningEntity::Consultancy("42".to_owned())));
    assert_eq!(session.entity_id(), Some("42"));
    assert_eq!(session.entity.as_ref().map(OwningEntity::role), Some(Role::Consultancy));

    let admin = Session::new("abc", None, Role::Admin, Some("42".to_owned()));
    assert_eq!(admin.entity, None);
}

#[test]
fn session_new_drops_empty_refresh_token() {
    let session = Session::new("abc", Some(String::new()), Role::Admin, None);
    assert_eq!(session.refresh_token, None);
}

#[test]
fn missing_entity_flags_institution_roles_only() {
    assert!(Session::new("a", None, Role::University, None).missing_entity());
    assert!(!Session::new("a", None, Role::University, Some("9".to_owned())).missing_entity());
    assert!(!Session::new("a", None, Role::Admin, None).missing_entity());
}
