//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` holds the identity model, `token_store` is the only accessor of
//! persisted session keys, and `login` turns login responses into sessions.
//! `password_reset` and `signup` cover the other credential flows; neither
//! writes a session.

pub mod login;
pub mod password_reset;
pub mod session;
pub mod signup;
pub mod token_store;
