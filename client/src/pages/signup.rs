//! Signup page. A created account is sent to the login page to sign in.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::signup::validate_signup_input;

/// `/signup`
#[component]
pub fn SignupPage() -> impl IntoView {
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
        if let Err(e) = validate_signup_input(&email_value, &password_value) {
            error.set(e.user_message());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&email_value, &password_value).await {
                Ok(()) => {
                    leptos::logging::log!("account created for {email_value}");
                    crate::util::auth::hard_navigate(crate::util::route_access::LOGIN_PATH);
                }
                Err(e) => {
                    leptos::logging::warn!("signup failed: {e}");
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
                <h1>"Sign Up"</h1>
                <p class="login-card__subtitle">"Create a student account"</p>
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
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        autocomplete="new-password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="login-card__links">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
