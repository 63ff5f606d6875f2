//! Article service for business logic.
//!
//! Articles follow the same rule as comments: anyone may read, only the author may change or
//! delete. Deleting an article removes its comments in the same transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository, user::UserRepository},
    error::{auth::AuthError, AppError, EntityKind},
    model::article::{Article, ArticleContentParam, PaginatedArticles},
};

/// Largest page size accepted by [`ArticleService::get_paginated`].
pub const MAX_PER_PAGE: u64 = 100;

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an article written by `author_id`.
    ///
    /// # Returns
    /// - `Ok(Article)` - The created article
    /// - `Err(AppError::ValidationErr)` - Title, contents or cover URL invalid
    /// - `Err(AppError::NotFound)` - Author does not exist
    pub async fn create(
        &self,
        author_id: i32,
        param: ArticleContentParam,
    ) -> Result<Article, AppError> {
        param.validate()?;

        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).find_by_id(author_id).await?.is_none() {
            return Err(AppError::not_found(EntityKind::User, author_id));
        }

        let article = ArticleRepository::new(&txn).create(author_id, param).await?;

        txn.commit().await?;

        tracing::debug!(article_id = article.id, author_id, "Created article");

        Ok(article)
    }

    /// Gets an article by ID.
    pub async fn get_by_id(&self, article_id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Article, article_id))
    }

    /// Gets one page of articles, newest first.
    ///
    /// `per_page` is clamped to `1..=MAX_PER_PAGE`.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedArticles, AppError> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        let (articles, total) = ArticleRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedArticles {
            articles,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    /// Replaces an article's title, cover and contents. Only the author may do this.
    ///
    /// # Returns
    /// - `Ok(Article)` - The updated article
    /// - `Err(AppError::NotFound)` - No article with that ID
    /// - `Err(AppError::AuthErr(AuthorMismatch))` - Requester is not the author
    pub async fn update(
        &self,
        article_id: i32,
        requester_id: i32,
        param: ArticleContentParam,
    ) -> Result<Article, AppError> {
        param.validate()?;

        let txn = self.db.begin().await?;
        let repo = ArticleRepository::new(&txn);

        check_authority(&repo, article_id, requester_id).await?;

        let article = repo
            .update(article_id, requester_id, param)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Article, article_id))?;

        txn.commit().await?;

        tracing::debug!(article_id, requester_id, "Updated article");

        Ok(article)
    }

    /// Deletes an article and all of its comments. Only the author may do this.
    pub async fn delete(&self, article_id: i32, requester_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ArticleRepository::new(&txn);

        check_authority(&repo, article_id, requester_id).await?;

        let removed_comments = CommentRepository::new(&txn)
            .delete_all_by_article_id(article_id)
            .await?;

        if !repo.delete(article_id, requester_id).await? {
            return Err(AppError::not_found(EntityKind::Article, article_id));
        }

        txn.commit().await?;

        tracing::debug!(
            article_id,
            requester_id,
            removed_comments,
            "Deleted article"
        );

        Ok(())
    }
}

async fn check_authority<C: sea_orm::ConnectionTrait>(
    repo: &ArticleRepository<'_, C>,
    article_id: i32,
    requester_id: i32,
) -> Result<Article, AppError> {
    let article = repo
        .find_by_id(article_id)
        .await?
        .ok_or_else(|| AppError::not_found(EntityKind::Article, article_id))?;

    if article.author_id != requester_id {
        return Err(AuthError::AuthorMismatch {
            kind: EntityKind::Article,
            id: article_id,
            requester_id,
        }
        .into());
    }

    Ok(article)
}
