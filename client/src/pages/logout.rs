//! Logout page: wipes the session on mount, then returns to the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::token_store::TokenStore;
use crate::util::auth::{logout, redirect_options};

#[component]
pub fn LogoutPage() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        let navigate = navigate.clone();
        logout(&TokenStore::browser(), move |to| navigate(to, redirect_options()));
    });

    view! { <p class="logout-message">"Logging out..."</p> }
}
