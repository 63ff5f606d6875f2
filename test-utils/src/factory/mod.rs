//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert into the
//! database; use `fixture` for in-memory models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let article = factory::article::create_article(&db, user.id).await?;
//!
//! // Or everything a comment needs at once
//! let (user, article, comment) = factory::helpers::create_comment_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let comment = factory::comment::CommentFactory::new(&db, article.id, user.id)
//!     .contents("first!")
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod comment;
pub mod helpers;
pub mod user;

pub use article::create_article;
pub use comment::create_comment;
pub use user::create_user;
