//! Login pages: one generic form plus per-role portals.
//!
//! Each portal posts the same credentials to the backend; the portal role is
//! only a fallback when the response names neither a role nor an entity. On
//! success the browser does a full navigation to the role's dashboard so
//! every component re-reads the fresh session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::login::validate_login_input;
use crate::state::password_reset::REQUEST_RESET_PATH;
use crate::state::session::Role;

fn login_heading(portal: Option<Role>) -> String {
    match portal {
        Some(role) => format!("{} Login", role.label()),
        None => "Login".to_owned(),
    }
}

fn login_subtitle(portal: Option<Role>) -> &'static str {
    match portal {
        Some(Role::Admin) => "Manage the platform",
        Some(Role::Consultancy) => "Manage your consultancy profile",
        Some(Role::University) => "Manage your university profile",
        Some(Role::Student) | None => "Access your dashboard",
    }
}

/// Shared login form. `portal` names the role this page is for, if any.
#[component]
pub fn LoginForm(#[prop(optional)] portal: Option<Role>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let email_value = email.get();
        let password_value = password.get();
        if let Err(e) = validate_login_input(&email_value, &password_value) {
            error.set(e.user_message());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(portal, &email_value, &password_value).await {
                Ok(outcome) => {
                    leptos::logging::log!("login succeeded as {}", outcome.session.role);
                    crate::util::auth::hard_navigate(outcome.redirect);
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    error.set(e.user_message());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <Navbar/>
            <div class="login-card">
                <h1>{login_heading(portal)}</h1>
                <p class="login-card__subtitle">{login_subtitle(portal)}</p>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label for="email">"Email Address"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        required=true
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>
                <p class="login-card__links">
                    <a href=REQUEST_RESET_PATH>"Forgot password?"</a>
                    " "
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

/// `/login`, for any role.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginForm/> }
}

/// `/admin/login`
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <LoginForm portal=Role::Admin/> }
}

/// `/consultancy/login`
#[component]
pub fn ConsultancyLoginPage() -> impl IntoView {
    view! { <LoginForm portal=Role::Consultancy/> }
}

/// `/university/login`
#[component]
pub fn UniversityLoginPage() -> impl IntoView {
    view! { <LoginForm portal=Role::University/> }
}
