//! Comment data repository for database operations.
//!
//! Reads join the author so the returned `Comment` carries the author's display name.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::comment::Comment;

/// Repository providing database operations for comments.
pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new comment and returns its entity model.
    ///
    /// The ID is assigned by the database; SQLite `AUTOINCREMENT` never reuses IDs of deleted
    /// rows.
    pub async fn create(
        &self,
        article_id: i32,
        author_id: i32,
        contents: String,
    ) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(article_id),
            author_id: ActiveValue::Set(author_id),
            contents: ActiveValue::Set(contents),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a comment by ID with its author's name.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment found
    /// - `Ok(None)` - No comment with that ID
    /// - `Err(DbErr)` - Database error, or the comment's author row is missing
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let result = entity::prelude::Comment::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        result.map(with_author_name).transpose()
    }

    /// Gets all comments on an article in creation order.
    ///
    /// Does not check that the article exists; an unknown article yields an empty list.
    pub async fn find_all_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, DbErr> {
        entity::prelude::Comment::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(with_author_name)
            .collect()
    }

    /// Replaces the contents of a comment written by `author_id`.
    ///
    /// The author filter is part of the UPDATE statement, so a comment that was deleted or
    /// never belonged to `author_id` is left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - Contents replaced
    /// - `Ok(false)` - No row matched both ID and author
    pub async fn update_contents(
        &self,
        id: i32,
        author_id: i32,
        contents: String,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .col_expr(entity::comment::Column::Contents, Expr::value(contents))
            .col_expr(entity::comment::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a comment written by `author_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Comment deleted
    /// - `Ok(false)` - No row matched both ID and author
    pub async fn delete(&self, id: i32, author_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every comment on an article, returning how many were removed.
    pub async fn delete_all_by_article_id(&self, article_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn with_author_name(
    (comment, author): (entity::comment::Model, Option<entity::user::Model>),
) -> Result<Comment, DbErr> {
    let author = author.ok_or_else(|| {
        DbErr::RecordNotFound(format!(
            "Author {} of comment {} not found",
            comment.author_id, comment.id
        ))
    })?;

    Ok(Comment::from_entity(comment, author.name))
}
