//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments.
///
/// The article and author must already exist.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    article_id: i32,
    author_id: i32,
    contents: String,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory; contents default to `"Comment {n}"`.
    pub fn new(db: &'a DatabaseConnection, article_id: i32, author_id: i32) -> Self {
        Self {
            db,
            article_id,
            author_id,
            contents: format!("Comment {}", next_id()),
        }
    }

    pub fn contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(self.article_id),
            author_id: ActiveValue::Set(self.author_id),
            contents: ActiveValue::Set(self.contents),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default contents.
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id, author_id).build().await
}
