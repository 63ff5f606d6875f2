//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer. They are responsible for:
//!
//! - **Business Logic**: validation, existence checks and author-match authorization
//! - **Orchestration**: coordinating several repositories in one operation
//! - **Transaction Management**: every find-then-mutate sequence runs in one transaction
//!
//! Services are stateless; they borrow the shared connection pool and receive the acting
//! user's ID as an explicit argument.

pub mod article;
pub mod auth;
pub mod comment;
