//! Networking modules for the external REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (login, token refresh, authenticated GETs)
//! and `types` defines the wire schema of the auth endpoints.

pub mod api;
pub mod types;
