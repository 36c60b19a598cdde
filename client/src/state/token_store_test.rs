use super::*;
use crate::util::storage::MemoryStorage;

fn store() -> TokenStore<MemoryStorage> {
    TokenStore::new(MemoryStorage::new())
}

#[test]
fn empty_store_reads_as_logged_out() {
    let store = store();
    assert_eq!(store.access_token(), None);
    assert_eq!(store.role(), None);
    assert_eq!(store.session(), None);
    assert!(!store.is_logged_in());
}

#[test]
fn set_session_writes_every_provided_field() {
    let store = store();
    let session = Session::new("abc", Some("def".to_owned()), Role::Consultancy, Some("42".to_owned()));
    store.set_session(&session);

    let raw = store.storage();
    assert_eq!(raw.get(ACCESS_TOKEN_KEY), Some("abc".to_owned()));
    assert_eq!(raw.get(REFRESH_TOKEN_KEY), Some("def".to_owned()));
    assert_eq!(raw.get(ROLE_KEY), Some("consultancy".to_owned()));
    assert_eq!(raw.get(CONSULTANCY_ID_KEY), Some("42".to_owned()));
    assert_eq!(raw.get(UNIVERSITY_ID_KEY), None);
    assert_eq!(store.session(), Some(session));
}

#[test]
fn set_session_without_refresh_leaves_refresh_key_absent() {
    let store = store();
    store.set_session(&Session::new("abc", None, Role::Admin, None));
    assert_eq!(store.refresh_token(), None);
    assert_eq!(store.role(), Some(Role::Admin));
    assert_eq!(store.entity_id(), None);
}

#[test]
fn second_login_fully_overwrites_first() {
    let store = store();
    store.set_session(&Session::new("c-token", Some("c-refresh".to_owned()), Role::Consultancy, Some("42".to_owned())));
    store.set_session(&Session::new("u-token", None, Role::University, Some("7".to_owned())));

    assert_eq!(store.access_token(), Some("u-token".to_owned()));
    assert_eq!(store.refresh_token(), None);
    assert_eq!(store.role(), Some(Role::University));
    assert_eq!(store.university_id(), Some("7".to_owned()));
    assert_eq!(store.consultancy_id(), None);
    assert_eq!(store.entity_id(), Some("7".to_owned()));
}

#[test]
fn clear_session_removes_canonical_and_legacy_keys() {
    let store = store();
    store.storage().set("token", "legacy");
    store.storage().set("college_id", "3");
    store.set_session(&Session::new("abc", Some("def".to_owned()), Role::University, Some("7".to_owned())));

    store.clear_session();

    assert!(store.storage().is_empty());
    assert!(!store.is_logged_in());
    assert_eq!(store.session(), None);
}

#[test]
fn set_session_wipes_legacy_keys() {
    let store = store();
    store.storage().set("token", "stale");
    store.set_session(&Session::new("abc", None, Role::Admin, None));
    assert_eq!(store.storage().get("token"), None);
}

#[test]
fn unrecognized_stored_role_reads_as_none() {
    let store = store();
    store.storage().set(ACCESS_TOKEN_KEY, "abc");
    store.storage().set(ROLE_KEY, "college");
    assert!(store.is_logged_in());
    assert_eq!(store.role(), None);
    assert_eq!(store.session(), None);
}

#[test]
fn empty_values_read_as_absent() {
    let store = store();
    store.storage().set(ACCESS_TOKEN_KEY, "");
    assert_eq!(store.access_token(), None);
    assert!(!store.is_logged_in());
}

#[test]
fn entity_id_ignores_other_roles_slot() {
    let store = store();
    store.storage().set(ACCESS_TOKEN_KEY, "abc");
    store.storage().set(ROLE_KEY, "university");
    store.storage().set(CONSULTANCY_ID_KEY, "42");
    assert_eq!(store.entity_id(), None);
}

#[test]
fn replace_access_token_keeps_role_and_entity() {
    let store = store();
    store.set_session(&Session::new("old", Some("r".to_owned()), Role::Consultancy, Some("42".to_owned())));
    store.replace_access_token("new");

    let session = store.session().unwrap();
    assert_eq!(session.access_token, "new");
    assert_eq!(session.refresh_token.as_deref(), Some("r"));
    assert_eq!(session.role, Role::Consultancy);
    assert_eq!(session.entity_id(), Some("42"));
}

#[test]
fn reads_are_side_effect_free() {
    let store = store();
    store.set_session(&Session::new("abc", None, Role::Student, None));
    let before = store.storage().len();
    let _ = store.session();
    let _ = store.entity_id();
    let _ = store.is_logged_in();
    assert_eq!(store.storage().len(), before);
}
