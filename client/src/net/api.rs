//! REST API helpers for the external Abroad Advise backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since session
//! state only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth failures degrade
//! to a message or a redirect without crashing hydration. Authenticated calls
//! refresh the access token once on a 401; a failed refresh clears the
//! session so the next guard check bounces the visitor.
//!
//! The refresh and retry sequence (`refresh_with`, `authorized_get`) takes
//! its HTTP steps as parameters, so the same code runs over `gloo-net` in the
//! browser and over scripted replies in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{RefreshResponse, RoleGreeting};
use crate::state::login::{LoginError, LoginOutcome};
use crate::state::password_reset::{ResetError, validate_new_password, validate_reset_request};
use crate::state::session::Role;
use crate::state::signup::{SignupError, validate_signup_input};
use crate::state::token_store::TokenStore;
use crate::util::storage::KeyValueStore;

/// Backend used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub const LOGIN_PATH: &str = "/auth/login/";
pub const REFRESH_PATH: &str = "/auth/token/refresh/";
pub const REGISTER_PATH: &str = "/auth/register/";
pub const PASSWORD_RESET_REQUEST_PATH: &str = "/auth/password-reset/request/";
pub const PASSWORD_RESET_SET_PATH: &str = "/auth/password-reset/set/";

/// Errors from authenticated API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No usable token and refreshing failed; the session has been cleared.
    #[error("session expired; please log in again")]
    SessionExpired,

    /// Still 401 after a successful refresh.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success status.
    #[error("request failed: {status}")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("response parse failed: {0}")]
    Parse(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Status and body of a finished HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Backend base URL baked in at compile time, without a trailing slash.
#[must_use]
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("API_BASE_URL"))
}

fn resolve_base_url(raw: Option<&'static str>) -> &'static str {
    raw.map(|u| u.trim().trim_end_matches('/'))
        .filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
}

/// Join `base` and `path` with exactly one slash.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Backend greeting endpoint for a role with a dashboard that shows one.
#[must_use]
pub fn role_greeting_path(role: Role) -> Option<&'static str> {
    match role {
        Role::Consultancy => Some("/auth/consultancy/"),
        Role::University => Some("/auth/university/"),
        Role::Admin | Role::Student => None,
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a response should trigger a token refresh and a single retry.
#[must_use]
pub fn should_refresh(status: u16, already_refreshed: bool) -> bool {
    status == 401 && !already_refreshed
}

/// Apply a refresh-endpoint response to the store.
///
/// On success the new access token replaces the old one and is returned.
///
/// # Errors
///
/// Returns `ApiError::SessionExpired` and clears the session when the
/// response is not a success or carries no access token.
pub fn apply_refresh<S: KeyValueStore>(store: &TokenStore<S>, status: u16, body: &str) -> Result<String, ApiError> {
    let access = if (200..300).contains(&status) {
        serde_json::from_str::<RefreshResponse>(body)
            .ok()
            .and_then(|r| r.access)
            .filter(|t| !t.is_empty())
    } else {
        None
    };
    match access {
        Some(token) => {
            store.replace_access_token(&token);
            Ok(token)
        }
        None => {
            leptos::logging::warn!("token refresh rejected (status {status}); signing out");
            store.clear_session();
            Err(ApiError::SessionExpired)
        }
    }
}

/// Send the stored refresh token through `post` and apply the reply.
///
/// # Errors
///
/// Returns `ApiError::SessionExpired` (and clears the session) when no
/// refresh token is stored or the backend rejects it. Transport failures
/// from `post` are passed through and leave the store alone.
pub async fn refresh_with<S, P, F>(store: &TokenStore<S>, post: P) -> Result<String, ApiError>
where
    S: KeyValueStore,
    P: FnOnce(String) -> F,
    F: Future<Output = Result<Reply, ApiError>>,
{
    let Some(refresh) = store.refresh_token() else {
        leptos::logging::warn!("no refresh token available; signing out");
        store.clear_session();
        return Err(ApiError::SessionExpired);
    };
    let reply = post(refresh).await?;
    apply_refresh(store, reply.status, &reply.body)
}

/// Run `get` with the stored access token, refreshing first when none is
/// stored and once more on a 401, then retrying once.
///
/// `get` receives the `Authorization` header value; `post_refresh` receives
/// the refresh token. Returns the body of a 2xx reply.
///
/// # Errors
///
/// `ApiError::Unauthorized` for a 401 after the retry, `ApiError::Status`
/// for any other failure status, and `refresh_with` errors.
pub async fn authorized_get<S, G, GF, P, PF>(
    store: &TokenStore<S>,
    mut get: G,
    mut post_refresh: P,
) -> Result<String, ApiError>
where
    S: KeyValueStore,
    G: FnMut(String) -> GF,
    GF: Future<Output = Result<Reply, ApiError>>,
    P: FnMut(String) -> PF,
    PF: Future<Output = Result<Reply, ApiError>>,
{
    let mut token = match store.access_token() {
        Some(token) => token,
        None => refresh_with(store, &mut post_refresh).await?,
    };
    let mut refreshed = false;
    loop {
        let reply = get(bearer(&token)).await?;
        if should_refresh(reply.status, refreshed) {
            leptos::logging::warn!("access token rejected; attempting refresh");
            token = refresh_with(store, &mut post_refresh).await?;
            refreshed = true;
            continue;
        }
        if reply.status == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !reply.is_success() {
            return Err(ApiError::Status { status: reply.status });
        }
        return Ok(reply.body);
    }
}

#[cfg(feature = "hydrate")]
async fn read_reply(resp: gloo_net::http::Response) -> Reply {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Reply { status, body }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(path: &str, payload: &T) -> Result<Reply, String> {
    let resp = gloo_net::http::Request::post(&endpoint(api_base_url(), path))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(read_reply(resp).await)
}

#[cfg(feature = "hydrate")]
async fn post_refresh(refresh: String) -> Result<Reply, ApiError> {
    post_json(REFRESH_PATH, &crate::net::types::RefreshRequest { refresh })
        .await
        .map_err(ApiError::Network)
}

#[cfg(feature = "hydrate")]
async fn get_with_header(url: &str, authorization: String) -> Result<Reply, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &authorization)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(read_reply(resp).await)
}

/// Post credentials to the login endpoint and finish the flow in the browser store.
///
/// # Errors
///
/// Returns a `LoginError` when the request fails or the flow rejects the response.
pub async fn login(portal: Option<Role>, email: &str, password: &str) -> Result<LoginOutcome, LoginError> {
    let request = crate::state::login::validate_login_input(email, password)?;
    #[cfg(feature = "hydrate")]
    {
        let reply = post_json(LOGIN_PATH, &request).await.map_err(LoginError::Network)?;
        crate::state::login::complete_login(&TokenStore::browser(), portal, reply.status, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (portal, request);
        Err(LoginError::Network("not available on server".to_owned()))
    }
}

/// Create an account. The visitor logs in separately afterwards.
///
/// # Errors
///
/// Returns a `SignupError` for blank input, a rejected account, or a failed request.
pub async fn signup(email: &str, password: &str) -> Result<(), SignupError> {
    let request = validate_signup_input(email, password)?;
    #[cfg(feature = "hydrate")]
    {
        let reply = post_json(REGISTER_PATH, &request).await.map_err(SignupError::Network)?;
        crate::state::signup::complete_signup(reply.status, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SignupError::Network("not available on server".to_owned()))
    }
}

/// Ask the backend to email a reset code; remembers the email on success.
///
/// # Errors
///
/// Returns a `ResetError` for a blank email, a rejection, or a failed request.
pub async fn request_password_reset(email: &str) -> Result<(), ResetError> {
    let request = validate_reset_request(email)?;
    #[cfg(feature = "hydrate")]
    {
        let reply = post_json(PASSWORD_RESET_REQUEST_PATH, &request).await.map_err(ResetError::Network)?;
        crate::state::password_reset::complete_reset_request(
            &crate::util::storage::BrowserStorage,
            &request,
            reply.status,
            &reply.body,
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ResetError::Network("not available on server".to_owned()))
    }
}

/// Set a new password using the stored email and code.
///
/// # Errors
///
/// Returns a `ResetError` when no reset is in progress, the passwords are
/// blank or differ, or the backend rejects the code.
pub async fn set_new_password(new_password: &str, confirm: &str) -> Result<(), ResetError> {
    let storage = crate::util::storage::BrowserStorage;
    let request = validate_new_password(&storage, new_password, confirm)?;
    #[cfg(feature = "hydrate")]
    {
        let reply = post_json(PASSWORD_RESET_SET_PATH, &request).await.map_err(ResetError::Network)?;
        crate::state::password_reset::complete_password_set(&storage, reply.status, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ResetError::Network("not available on server".to_owned()))
    }
}

/// Exchange the stored refresh token for a new access token.
///
/// # Errors
///
/// See `refresh_with`.
pub async fn refresh_access_token() -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        refresh_with(&TokenStore::browser(), post_refresh).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET` an API path with the bearer token, refreshing once on a 401.
///
/// Returns the response body of a 2xx response.
///
/// # Errors
///
/// See `authorized_get`.
pub async fn fetch_with_auth(path: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(api_base_url(), path);
        let url = url.as_str();
        authorized_get(&TokenStore::browser(), move |auth| get_with_header(url, auth), post_refresh).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the backend's greeting for the signed-in role.
///
/// # Errors
///
/// Propagates `fetch_with_auth` errors and body parse failures; a role with
/// no greeting endpoint yields `ApiError::Status { status: 404 }`.
pub async fn fetch_role_greeting(role: Role) -> Result<RoleGreeting, ApiError> {
    let path = role_greeting_path(role).ok_or(ApiError::Status { status: 404 })?;
    let body = fetch_with_auth(path).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}
