//! Wire DTOs shared by the HTTP API.
//!
//! These types define the JSON contract; the server converts between them and its domain
//! models with explicit `from`/`into_dto` functions.

pub mod api;
pub mod article;
pub mod comment;
pub mod user;
