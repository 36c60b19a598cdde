//! Route-authorization table and the access decision evaluated against it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated page consults this one table, so the allow-list per route is
//! auditable in a single place and every denial redirects to the same target.
//! The decision is a pure function of the stored token and role; it is a UI
//! gate only, and the backend still authorizes every API call.

#[cfg(test)]
#[path = "route_access_test.rs"]
mod route_access_test;

use crate::state::session::Role;

/// Where denied visitors are sent.
pub const DENIED_REDIRECT: &str = "/";

/// Generic login page, also the logout landing page.
pub const LOGIN_PATH: &str = "/login";

/// Access requirement for a route prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Roles(&'static [Role]),
}

/// One row of the authorization table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRule {
    pub prefix: &'static str,
    pub access: RouteAccess,
}

/// Ordered table; the first matching prefix wins.
pub const ROUTE_RULES: &[RouteRule] = &[
    RouteRule { prefix: "/admin/login", access: RouteAccess::Public },
    RouteRule { prefix: "/admin", access: RouteAccess::Roles(&[Role::Admin]) },
    RouteRule { prefix: "/dashboard/consultancy", access: RouteAccess::Roles(&[Role::Consultancy]) },
    RouteRule { prefix: "/dashboard/university", access: RouteAccess::Roles(&[Role::University]) },
];

/// Why a guard refused to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    MissingToken,
    RoleNotPermitted,
}

impl DenyReason {
    /// Diagnostic line for the console. Visitors never see it.
    #[must_use]
    pub fn diagnostic(self) -> &'static str {
        match self {
            Self::MissingToken => "no access token found; redirecting",
            Self::RoleNotPermitted => "role not permitted for this route; redirecting",
        }
    }
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect { to: &'static str, reason: DenyReason },
}

impl GuardDecision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// True when `path` is `prefix` or lies beneath it on a segment boundary.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    let path = normalize(path);
    let prefix = normalize(prefix);
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Look up the access rule for `path`. Paths absent from the table are public.
#[must_use]
pub fn route_access(path: &str) -> RouteAccess {
    ROUTE_RULES
        .iter()
        .find(|rule| matches_prefix(path, rule.prefix))
        .map_or(RouteAccess::Public, |rule| rule.access)
}

/// Roles allowed on `path`, or `None` when the route is public.
#[must_use]
pub fn required_roles(path: &str) -> Option<&'static [Role]> {
    match route_access(path) {
        RouteAccess::Public => None,
        RouteAccess::Roles(roles) => Some(roles),
    }
}

/// Decide whether a visitor holding `token` and `role` may see a page
/// restricted to `allowed`.
///
/// A missing or empty token and an absent or unlisted role both redirect to
/// the same place; only the reason differs.
#[must_use]
pub fn evaluate(token: Option<&str>, role: Option<Role>, allowed: &[Role]) -> GuardDecision {
    if token.is_none_or(str::is_empty) {
        return GuardDecision::Redirect { to: DENIED_REDIRECT, reason: DenyReason::MissingToken };
    }
    match role {
        Some(role) if allowed.contains(&role) => GuardDecision::Allow,
        _ => GuardDecision::Redirect { to: DENIED_REDIRECT, reason: DenyReason::RoleNotPermitted },
    }
}

/// Landing page after a successful login.
#[must_use]
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Consultancy => "/dashboard/consultancy",
        Role::University => "/dashboard/university",
        Role::Student => "/",
    }
}

/// Role-specific login page. Students use the generic page.
#[must_use]
pub fn login_path(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => "/admin/login",
        Some(Role::Consultancy) => "/consultancy/login",
        Some(Role::University) => "/university/login",
        Some(Role::Student) | None => LOGIN_PATH,
    }
}
