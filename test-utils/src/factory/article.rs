//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// The author must already exist.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    cover_url: Option<String>,
    contents: String,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {n}"`
    /// - cover_url: `None`
    /// - contents: `"Contents of article {n}"`
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Article {}", id),
            cover_url: None,
            contents: format!("Contents of article {}", id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn cover_url(mut self, cover_url: Option<String>) -> Self {
        self.cover_url = cover_url;
        self
    }

    pub fn contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }

    /// Builds and inserts the article entity into the database.
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        let now = Utc::now();
        entity::article::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            cover_url: ActiveValue::Set(self.cover_url),
            contents: ActiveValue::Set(self.contents),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values written by `author_id`.
pub async fn create_article(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, author_id).build().await
}
