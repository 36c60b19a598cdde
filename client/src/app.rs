//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::pages::dashboard::{AdminDashboardPage, ConsultancyDashboardPage, UniversityDashboardPage};
use crate::pages::home::HomePage;
use crate::pages::login::{AdminLoginPage, ConsultancyLoginPage, LoginPage, UniversityLoginPage};
use crate::pages::logout::LogoutPage;
use crate::pages::password_reset::{RequestResetPage, SetPasswordPage, VerifyResetPage};
use crate::pages::signup::SignupPage;
use crate::state::session::Role;
use crate::util::route_access::dashboard_path;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Dashboard routes are wrapped in `RouteGuard`, which takes its allow-list
/// from the route-authorization table for the same path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/abroad-advise.css"/>
        <Title text="Abroad Advise"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=(StaticSegment("passreset"), StaticSegment("request")) view=RequestResetPage/>
                <Route path=(StaticSegment("passreset"), StaticSegment("verify")) view=VerifyResetPage/>
                <Route path=(StaticSegment("passreset"), StaticSegment("set")) view=SetPasswordPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <Route path=(StaticSegment("consultancy"), StaticSegment("login")) view=ConsultancyLoginPage/>
                <Route path=(StaticSegment("university"), StaticSegment("login")) view=UniversityLoginPage/>
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <RouteGuard path=dashboard_path(Role::Admin)>
                                <AdminDashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("consultancy"))
                    view=|| {
                        view! {
                            <RouteGuard path=dashboard_path(Role::Consultancy)>
                                <ConsultancyDashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("university"))
                    view=|| {
                        view! {
                            <RouteGuard path=dashboard_path(Role::University)>
                                <UniversityDashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
