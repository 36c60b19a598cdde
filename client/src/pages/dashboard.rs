//! Role dashboards for admins, consultancies, and universities.
//!
//! SYSTEM CONTEXT
//! ==============
//! These pages are only mounted behind `RouteGuard`. They read the session on
//! mount and ask the backend's role-only endpoint for a greeting, which also
//! exercises the refresh-on-401 path of `net::api::fetch_with_auth`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::session::{Role, Session};
use crate::state::token_store::TokenStore;

/// Load state of the backend greeting.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Greeting {
    Loading,
    Loaded(String),
    Failed,
    Unsupported,
}

fn entity_summary(session: &Session) -> String {
    match (session.role, session.entity_id()) {
        (Role::Admin | Role::Student, _) => "Platform-wide access".to_owned(),
        (role, Some(id)) => format!("{} #{id}", role.label()),
        (role, None) => format!("No {} linked to this account", role.as_str()),
    }
}

fn greeting_text(greeting: &Greeting) -> String {
    match greeting {
        Greeting::Loading => "Loading...".to_owned(),
        Greeting::Loaded(message) => message.clone(),
        Greeting::Failed => "Failed to load dashboard data.".to_owned(),
        Greeting::Unsupported => String::new(),
    }
}

/// Dashboard body shared by every role.
#[component]
fn DashboardShell(role: Role) -> impl IntoView {
    let session = RwSignal::new(None::<Session>);
    let greeting = RwSignal::new(if crate::net::api::role_greeting_path(role).is_some() {
        Greeting::Loading
    } else {
        Greeting::Unsupported
    });

    Effect::new(move || session.set(TokenStore::browser().session()));

    #[cfg(feature = "hydrate")]
    {
        if greeting.get_untracked() == Greeting::Loading {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_role_greeting(role).await {
                    Ok(body) => greeting.set(Greeting::Loaded(body.message)),
                    Err(e) => {
                        leptos::logging::warn!("dashboard greeting failed: {e}");
                        greeting.set(Greeting::Failed);
                    }
                }
            });
        }
    }

    view! {
        <div class="dashboard-page">
            <Navbar title=format!("{} Dashboard", role.label())/>
            <main class="dashboard-page__body">
                <h1>{format!("Welcome to the {} Dashboard", role.label())}</h1>
                <p class="dashboard-page__entity">
                    {move || session.get().map(|s| entity_summary(&s)).unwrap_or_default()}
                </p>
                <p class="dashboard-page__greeting">{move || greeting_text(&greeting.get())}</p>
            </main>
        </div>
    }
}

/// `/admin`
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <DashboardShell role=Role::Admin/> }
}

/// `/dashboard/consultancy`
#[component]
pub fn ConsultancyDashboardPage() -> impl IntoView {
    view! { <DashboardShell role=Role::Consultancy/> }
}

/// `/dashboard/university`
#[component]
pub fn UniversityDashboardPage() -> impl IntoView {
    view! { <DashboardShell role=Role::University/> }
}
