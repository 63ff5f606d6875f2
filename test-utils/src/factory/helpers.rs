//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique emails and names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Only used to keep factory-generated unique columns apart; row ids always come from the
/// database.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and an article written by that user.
///
/// # Returns
/// - `Ok((user, article))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::article::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let article = crate::factory::article::create_article(db, user.id).await?;

    Ok((user, article))
}

/// Creates a user, an article by that user, and a comment by that user on the article.
///
/// Use the individual factories when the comment author must differ from the article author.
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::article::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let (user, article) = create_article_with_author(db).await?;
    let comment = crate::factory::comment::create_comment(db, article.id, user.id).await?;

    Ok((user, article, comment))
}
