//! Token store: the one place session state is read from or written to.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login writes here, the route guard and navigation shell read from here on
//! mount, logout clears it, and the refresh flow swaps the access token. All of
//! them go through `TokenStore`, never through raw storage keys.
//!
//! DESIGN
//! ======
//! One canonical key schema. Keys written by older builds of the site are
//! listed in `LEGACY_KEYS` so login and logout wipe them too; they are never
//! read back. No expiry is tracked here: an expired token is discovered when
//! an API call answers 401.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use crate::state::session::{OwningEntity, Role, Session};
use crate::util::storage::{BrowserStorage, KeyValueStore};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const ROLE_KEY: &str = "user_role";
pub const CONSULTANCY_ID_KEY: &str = "consultancy_id";
pub const UNIVERSITY_ID_KEY: &str = "university_id";

/// Every key the canonical schema writes.
pub const SESSION_KEYS: [&str; 5] =
    [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, ROLE_KEY, CONSULTANCY_ID_KEY, UNIVERSITY_ID_KEY];

/// Keys from earlier key naming that must not outlive a login or logout.
pub const LEGACY_KEYS: [&str; 4] = ["token", "access_token", "refresh_token", "college_id"];

/// Session accessor over any key/value backend.
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S = BrowserStorage> {
    storage: S,
}

impl TokenStore<BrowserStorage> {
    /// Store backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self { storage: BrowserStorage }
    }
}

impl<S: KeyValueStore> TokenStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace whatever session is stored with `session`.
    ///
    /// Every session key is removed first so no field of a previous login
    /// (in particular the other role's entity id) survives.
    pub fn set_session(&self, session: &Session) {
        self.clear_session();
        self.storage.set(ACCESS_TOKEN_KEY, &session.access_token);
        if let Some(refresh) = &session.refresh_token {
            self.storage.set(REFRESH_TOKEN_KEY, refresh);
        }
        self.storage.set(ROLE_KEY, session.role.as_str());
        match &session.entity {
            Some(OwningEntity::Consultancy(id)) => self.storage.set(CONSULTANCY_ID_KEY, id),
            Some(OwningEntity::University(id)) => self.storage.set(UNIVERSITY_ID_KEY, id),
            None => {}
        }
    }

    /// Remove every session key, canonical and legacy.
    pub fn clear_session(&self) {
        for key in SESSION_KEYS.iter().chain(LEGACY_KEYS.iter()) {
            self.storage.remove(key);
        }
    }

    /// Swap in a freshly issued access token, keeping role and entity.
    pub fn replace_access_token(&self, access_token: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, access_token);
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    /// Stored role, or `None` when absent or unrecognized.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.read(ROLE_KEY).as_deref().and_then(Role::parse)
    }

    #[must_use]
    pub fn consultancy_id(&self) -> Option<String> {
        self.read(CONSULTANCY_ID_KEY)
    }

    #[must_use]
    pub fn university_id(&self) -> Option<String> {
        self.read(UNIVERSITY_ID_KEY)
    }

    /// Entity id belonging to the stored role, if any.
    #[must_use]
    pub fn entity_id(&self) -> Option<String> {
        match self.role()? {
            Role::Consultancy => self.consultancy_id(),
            Role::University => self.university_id(),
            Role::Admin | Role::Student => None,
        }
    }

    /// True when an access token is present. Says nothing about its validity.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.access_token().is_some()
    }

    /// Full session, or `None` unless both token and a known role are stored.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        let access_token = self.access_token()?;
        let role = self.role()?;
        Some(Session::new(access_token, self.refresh_token(), role, self.entity_id()))
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|v| !v.is_empty())
    }
}
