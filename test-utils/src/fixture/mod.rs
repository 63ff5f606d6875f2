//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures only build in-memory entity models. Use them for unit tests of
//! conversions and validation where a database would be overhead.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let comment = fixture::comment::entity();
//! assert_eq!(comment.contents, fixture::comment::DEFAULT_CONTENTS);
//! ```

pub mod article;
pub mod comment;
pub mod user;

pub use article::entity as article_entity;
pub use comment::entity as comment_entity;
pub use user::entity as user_entity;
