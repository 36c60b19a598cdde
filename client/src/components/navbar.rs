//! Site navigation bar with session-aware login/logout control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only token presence matters here, not the role. Presence is read once on
//! mount; changes made in other tabs show up on the next page load.

use leptos::prelude::*;

use crate::state::token_store::TokenStore;
use crate::util::auth::{hard_navigate, logout};
use crate::util::route_access::LOGIN_PATH;

/// Top navigation bar.
#[component]
pub fn Navbar(#[prop(optional, into)] title: Option<String>) -> impl IntoView {
    let logged_in = RwSignal::new(false);
    Effect::new(move || logged_in.set(TokenStore::browser().is_logged_in()));

    let on_logout = move |_| {
        logout(&TokenStore::browser(), hard_navigate);
        logged_in.set(false);
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Abroad Advise"</a>
            {title.map(|t| view! { <span class="navbar__title">{t}</span> })}
            <span class="navbar__spacer"></span>
            <Show
                when=move || logged_in.get()
                fallback=|| view! { <a class="navbar__link" href=LOGIN_PATH>"Login"</a> }
            >
                <button class="btn navbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
