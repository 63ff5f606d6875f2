//! Article data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::article::{Article, ArticleContentParam};

/// Repository providing database operations for articles.
pub struct ArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new article written by `author_id`.
    pub async fn create(
        &self,
        author_id: i32,
        param: ArticleContentParam,
    ) -> Result<Article, DbErr> {
        let now = Utc::now();
        let entity = entity::article::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            title: ActiveValue::Set(param.title),
            cover_url: ActiveValue::Set(param.cover_url),
            contents: ActiveValue::Set(param.contents),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(entity))
    }

    /// Finds an article by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Article::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Article::from_entity))
    }

    /// Checks if an article with `id` exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of articles ordered newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Page size, must be greater than zero
    ///
    /// # Returns
    /// - `Ok((articles, total))` - Articles on the page and the total article count; a page past
    ///   the end, including one whose offset overflows, is empty
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Article>, u64), DbErr> {
        let paginator = entity::prelude::Article::find()
            .order_by_desc(entity::article::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;

        // The paginator multiplies page by per_page unchecked.
        let in_range = page
            .checked_mul(per_page)
            .is_some_and(|offset| offset < total);
        if !in_range {
            return Ok((Vec::new(), total));
        }

        let articles = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Article::from_entity)
            .collect();

        Ok((articles, total))
    }

    /// Replaces title, cover and contents of an article owned by `author_id`.
    ///
    /// The author filter is part of the UPDATE statement, so nothing changes unless the row
    /// still exists and still belongs to `author_id`.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - The updated article
    /// - `Ok(None)` - No row matched both ID and author
    pub async fn update(
        &self,
        id: i32,
        author_id: i32,
        param: ArticleContentParam,
    ) -> Result<Option<Article>, DbErr> {
        let result = entity::prelude::Article::update_many()
            .col_expr(entity::article::Column::Title, Expr::value(param.title))
            .col_expr(entity::article::Column::CoverUrl, Expr::value(param.cover_url))
            .col_expr(entity::article::Column::Contents, Expr::value(param.contents))
            .col_expr(entity::article::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::article::Column::Id.eq(id))
            .filter(entity::article::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Deletes an article owned by `author_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Article deleted
    /// - `Ok(false)` - No row matched both ID and author
    pub async fn delete(&self, id: i32, author_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Article::delete_many()
            .filter(entity::article::Column::Id.eq(id))
            .filter(entity::article::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
