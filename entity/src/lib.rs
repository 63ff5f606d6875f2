//! SeaORM entity models for the blog schema.
//!
//! Tables are created by the `migration` crate; these models mirror them column for column.

pub mod prelude;

pub mod article;
pub mod comment;
pub mod user;
