//! HTTP request handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into domain parameters and pass the
//! requester's ID explicitly to the service layer.

pub mod article;
pub mod auth;
pub mod comment;
pub mod param;
