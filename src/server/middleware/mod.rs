//! Request guards and session access.

pub mod auth;
pub mod session;
