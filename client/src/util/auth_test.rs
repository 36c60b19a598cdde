use super::*;
use crate::state::session::Session;
use crate::util::route_access::DENIED_REDIRECT;
use crate::util::storage::MemoryStorage;

fn store_with(session: Option<Session>) -> TokenStore<MemoryStorage> {
    let store = TokenStore::new(MemoryStorage::new());
    if let Some(session) = session {
        store.set_session(&session);
    }
    store
}

/// Run the guard and capture where it navigated, if anywhere.
fn guard(store: &TokenStore<MemoryStorage>, allowed: &[Role]) -> (bool, Option<String>) {
    let mut target = None;
    let rendered = check_access(store, allowed, |to| target = Some(to.to_owned()));
    (rendered, target)
}

#[test]
fn no_token_redirects_and_does_not_render() {
    let store = store_with(None);
    for role in Role::ALL {
        assert_eq!(guard(&store, &[role]), (false, Some(DENIED_REDIRECT.to_owned())));
    }
}

#[test]
fn wrong_role_redirects_and_does_not_render() {
    for held in Role::ALL {
        let store = store_with(Some(Session::new("tok", None, held, None)));
        for allowed in Role::ALL.into_iter().filter(|r| *r != held) {
            assert_eq!(guard(&store, &[allowed]), (false, Some(DENIED_REDIRECT.to_owned())));
        }
    }
}

#[test]
fn matching_role_renders_without_redirect() {
    let store = store_with(Some(Session::new("tok", None, Role::Consultancy, Some("42".to_owned()))));
    assert_eq!(guard(&store, &[Role::Consultancy]), (true, None));
}

#[test]
fn token_without_role_is_denied() {
    let store = TokenStore::new(MemoryStorage::new());
    store.storage().set("accessToken", "tok");
    assert_eq!(guard(&store, &Role::ALL), (false, Some(DENIED_REDIRECT.to_owned())));
}

#[test]
fn nested_guards_check_independently() {
    let store = store_with(Some(Session::new("tok", None, Role::Admin, None)));
    assert_eq!(guard(&store, &[Role::Admin]), (true, None));
    assert_eq!(guard(&store, &[Role::University]), (false, Some(DENIED_REDIRECT.to_owned())));
    assert_eq!(guard(&store, &[Role::Admin]), (true, None));
}

#[test]
fn logout_clears_store_and_navigates_to_login() {
    let store = store_with(Some(Session::new("tok", Some("ref".to_owned()), Role::University, Some("7".to_owned()))));
    let mut target = None;
    logout(&store, |to| target = Some(to.to_owned()));

    assert_eq!(target.as_deref(), Some(LOGIN_PATH));
    assert!(store.storage().is_empty());
}

#[test]
fn guard_after_logout_matches_never_logged_in() {
    let fresh = store_with(None);
    let store = store_with(Some(Session::new("tok", None, Role::Admin, None)));
    logout(&store, |_| {});

    for role in Role::ALL {
        assert_eq!(guard(&store, &[role]), guard(&fresh, &[role]));
    }
}

#[test]
fn redirect_options_replace_history() {
    assert!(redirect_options().replace);
}
