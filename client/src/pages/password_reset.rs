//! Password reset pages: request a code, enter it, set a new password.

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod password_reset_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::password_reset::{
    REQUEST_RESET_PATH, SET_PASSWORD_PATH, pending_reset, record_reset_code, validate_new_password,
    validate_reset_request,
};
use crate::util::auth::redirect_options;
use crate::util::storage::BrowserStorage;

/// Which of the three steps a page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResetStep {
    Request,
    Verify,
    Set,
}

impl ResetStep {
    fn heading(self) -> &'static str {
        match self {
            Self::Request => "Reset Password",
            Self::Verify => "Enter Reset Code",
            Self::Set => "Set New Password",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            Self::Request => "Enter your email to get a reset code",
            Self::Verify => "Enter the code we emailed you",
            Self::Set => "Enter your new password to complete reset",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::Request => "Send Verification Code",
            Self::Verify => "Continue",
            Self::Set => "Reset Password",
        }
    }
}

/// Card layout shared by the three steps.
#[component]
fn ResetCard(
    step: ResetStep,
    error: RwSignal<String>,
    status: RwSignal<String>,
    on_submit: impl FnMut(leptos::ev::SubmitEvent) + 'static,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="login-page">
            <Navbar/>
            <div class="login-card">
                <h1>{step.heading()}</h1>
                <p class="login-card__subtitle">{step.subtitle()}</p>
                <Show when=move || !status.get().is_empty()>
                    <p class="login-message login-message--ok">{move || status.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    {children()}
                    <button class="login-button" type="submit">{step.submit_label()}</button>
                </form>
            </div>
        </div>
    }
}

/// `/passreset/request`
#[component]
pub fn RequestResetPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        status.set(String::new());
        let email_value = email.get();
        if let Err(e) = validate_reset_request(&email_value) {
            error.set(e.user_message());
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&email_value).await {
                Ok(()) => {
                    status.set(crate::state::password_reset::CODE_SENT_MESSAGE.to_owned());
                    crate::util::auth::hard_navigate(crate::state::password_reset::VERIFY_RESET_PATH);
                }
                Err(e) => {
                    leptos::logging::warn!("password reset request failed: {e}");
                    error.set(e.user_message());
                }
            }
        });
    };

    view! {
        <ResetCard step=ResetStep::Request error=error status=status on_submit=on_submit>
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
        </ResetCard>
    }
}

/// `/passreset/verify`
#[component]
pub fn VerifyResetPage() -> impl IntoView {
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        match record_reset_code(&BrowserStorage, &code.get()) {
            Ok(()) => crate::util::auth::hard_navigate(SET_PASSWORD_PATH),
            Err(e) => error.set(e.user_message()),
        }
    };

    view! {
        <ResetCard step=ResetStep::Verify error=error status=status on_submit=on_submit>
            <label for="code">"Verification Code"</label>
            <input
                id="code"
                class="login-input"
                type="text"
                inputmode="numeric"
                autocomplete="one-time-code"
                required=true
                prop:value=move || code.get()
                on:input=move |ev| code.set(event_target_value(&ev))
            />
        </ResetCard>
    }
}

/// `/passreset/set`. Sends visitors without a stored email and code back to
/// the request step.
#[component]
pub fn SetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if pending_reset(&BrowserStorage).is_none() {
            navigate(REQUEST_RESET_PATH, redirect_options());
        }
    });

    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        status.set(String::new());
        let new_value = new_password.get();
        let confirm_value = confirm.get();
        if let Err(e) = validate_new_password(&BrowserStorage, &new_value, &confirm_value) {
            error.set(e.user_message());
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_new_password(&new_value, &confirm_value).await {
                Ok(()) => {
                    status.set(crate::state::password_reset::PASSWORD_RESET_MESSAGE.to_owned());
                    crate::util::auth::hard_navigate(crate::util::route_access::LOGIN_PATH);
                }
                Err(e) => {
                    leptos::logging::warn!("password reset failed: {e}");
                    error.set(e.user_message());
                }
            }
        });
    };

    view! {
        <ResetCard step=ResetStep::Set error=error status=status on_submit=on_submit>
            <label for="new-password">"New Password"</label>
            <input
                id="new-password"
                class="login-input"
                type="password"
                autocomplete="new-password"
                required=true
                prop:value=move || new_password.get()
                on:input=move |ev| new_password.set(event_target_value(&ev))
            />
            <label for="confirm-password">"Confirm Password"</label>
            <input
                id="confirm-password"
                class="login-input"
                type="password"
                autocomplete="new-password"
                required=true
                prop:value=move || confirm.get()
                on:input=move |ev| confirm.set(event_target_value(&ev))
            />
        </ResetCard>
    }
}
