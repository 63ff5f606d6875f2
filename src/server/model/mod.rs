//! Domain models and operation-specific parameter types.
//!
//! Domain models are built from entity models at the repository boundary (`from_entity`) and
//! turned into DTOs at the controller boundary (`into_dto`). Parameter types are built from
//! request DTOs and validated by the service before any database access.

pub mod article;
pub mod comment;
pub mod user;
