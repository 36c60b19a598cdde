//! Route guard wrapping role-restricted pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The allow-list comes from `util::route_access::ROUTE_RULES`, keyed by the
//! route path the guard is mounted for. Until the on-mount check resolves the
//! guard renders nothing; a denied visitor is redirected to the site root and
//! never sees the wrapped page.

#[cfg(all(test, feature = "ssr"))]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::auth::install_route_guard;
use crate::util::route_access::required_roles;

/// Render `children` only for visitors whose stored role may open `path`.
#[component]
pub fn RouteGuard(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let Some(allowed) = required_roles(path) else {
        return children().into_any();
    };
    let permitted = install_route_guard(allowed, use_navigate());
    gated(permitted.into(), children)
}

/// `children` while `permitted` holds, nothing otherwise.
fn gated(permitted: Signal<bool>, children: ChildrenFn) -> AnyView {
    view! { <Show when=move || permitted.get()>{children()}</Show> }.into_any()
}
