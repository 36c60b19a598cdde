//! Public landing page with entry points to each login portal.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::session::Role;
use crate::util::route_access::login_path;

/// Roles that have a dedicated portal on the landing page.
const PORTAL_ROLES: [Role; 3] = [Role::Consultancy, Role::University, Role::Admin];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Navbar/>
            <section class="home-page__hero">
                <h1>"Abroad Advise"</h1>
                <p>"Find consultancies, universities, courses and destinations for studying abroad."</p>
            </section>
            <section class="home-page__portals">
                {PORTAL_ROLES
                    .into_iter()
                    .map(|role| {
                        view! {
                            <a class="home-page__portal" href=login_path(Some(role))>
                                {format!("{} portal", role.label())}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
