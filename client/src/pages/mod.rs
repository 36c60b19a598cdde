//! Routed pages.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod logout;
pub mod password_reset;
pub mod signup;
