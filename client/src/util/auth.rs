//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the logout page, and the navigation shell must apply
//! identical redirect behavior, so the store-reading and navigation glue lives
//! here and takes the navigator as a parameter.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Role;
use crate::state::token_store::TokenStore;
use crate::util::route_access::{self, GuardDecision, LOGIN_PATH};
use crate::util::storage::KeyValueStore;

/// Read the store once and decide whether a page restricted to `allowed` may render.
///
/// On denial, logs the reason and calls `navigate` with the redirect target.
/// Returns `true` only when the wrapped page should render.
pub fn check_access<S, F>(store: &TokenStore<S>, allowed: &[Role], navigate: F) -> bool
where
    S: KeyValueStore,
    F: FnOnce(&str),
{
    let token = store.access_token();
    let role = store.role();
    match route_access::evaluate(token.as_deref(), role, allowed) {
        GuardDecision::Allow => true,
        GuardDecision::Redirect { to, reason } => {
            leptos::logging::warn!("route guard: {}", reason.diagnostic());
            navigate(to);
            false
        }
    }
}

/// Clear the session and send the visitor to the login page.
///
/// Purely client-side: the backend is not told, so an issued token stays
/// valid there until it expires on its own.
pub fn logout<S, F>(store: &TokenStore<S>, navigate: F)
where
    S: KeyValueStore,
    F: FnOnce(&str),
{
    store.clear_session();
    leptos::logging::log!("session cleared");
    navigate(LOGIN_PATH);
}

/// Full-page navigation. Remounts the app so every component re-reads the
/// token store; a no-op outside the browser.
pub fn hard_navigate(to: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(to);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = to;
    }
}

/// Navigation options for guard and logout redirects: replace history so
/// the back button does not return to a page that immediately bounces.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Run the guard check once on mount against the browser store.
///
/// Returns a signal that stays `false` until the check resolves and allows.
pub fn install_route_guard<F>(allowed: &'static [Role], navigate: F) -> ReadSignal<bool>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let (permitted, set_permitted) = signal(false);
    Effect::new(move || {
        let navigate = navigate.clone();
        let ok = check_access(&TokenStore::browser(), allowed, move |to| navigate(to, redirect_options()));
        set_permitted.set(ok);
    });
    permitted
}
