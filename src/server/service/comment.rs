//! Comment lifecycle service.
//!
//! Mediates every comment state change. Creation requires an existing article and author;
//! update and delete require the requester to be the comment's author.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository, user::UserRepository},
    error::{auth::AuthError, AppError, EntityKind},
    model::comment::{Comment, CreateCommentParam, UpdateCommentParam},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment on an article.
    ///
    /// # Arguments
    /// - `article_id` - Article being commented on
    /// - `author_id` - Authenticated user writing the comment
    /// - `param` - Comment contents
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment with a fresh ID
    /// - `Err(AppError::ValidationErr)` - Contents blank or too long
    /// - `Err(AppError::NotFound)` - Article missing (checked first), or author missing
    pub async fn create(
        &self,
        article_id: i32,
        author_id: i32,
        param: CreateCommentParam,
    ) -> Result<Comment, AppError> {
        param.validate()?;

        let txn = self.db.begin().await?;

        if !ArticleRepository::new(&txn).exists(article_id).await? {
            return Err(AppError::not_found(EntityKind::Article, article_id));
        }

        let author = UserRepository::new(&txn)
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::User, author_id))?;

        let comment = CommentRepository::new(&txn)
            .create(article_id, author.id, param.contents)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            comment_id = comment.id,
            article_id,
            author_id,
            "Created comment"
        );

        Ok(Comment::from_entity(comment, author.name))
    }

    /// Gets a comment by ID. Reading is not restricted.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Comment found
    /// - `Err(AppError::NotFound)` - No comment with that ID
    pub async fn find_by_id(&self, comment_id: i32) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Comment, comment_id))
    }

    /// Gets all comments on an article in creation order.
    ///
    /// The article's existence is not checked; an unknown article yields an empty list.
    pub async fn find_all_by_article(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        let comments = CommentRepository::new(self.db)
            .find_all_by_article_id(article_id)
            .await?;

        Ok(comments)
    }

    /// Replaces a comment's contents. Only the author may do this.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The updated comment; ID, article and author unchanged
    /// - `Err(AppError::ValidationErr)` - Contents blank or too long
    /// - `Err(AppError::NotFound)` - No comment with that ID
    /// - `Err(AppError::AuthErr(AuthorMismatch))` - Requester is not the author
    pub async fn update(
        &self,
        comment_id: i32,
        requester_id: i32,
        param: UpdateCommentParam,
    ) -> Result<Comment, AppError> {
        self.update_scoped(None, comment_id, requester_id, param)
            .await
    }

    /// Like [`Self::update`], addressed through the article the comment belongs to.
    ///
    /// A comment on a different article is reported as `NotFound` before the author check.
    pub async fn update_on_article(
        &self,
        article_id: i32,
        comment_id: i32,
        requester_id: i32,
        param: UpdateCommentParam,
    ) -> Result<Comment, AppError> {
        self.update_scoped(Some(article_id), comment_id, requester_id, param)
            .await
    }

    async fn update_scoped(
        &self,
        article_id: Option<i32>,
        comment_id: i32,
        requester_id: i32,
        param: UpdateCommentParam,
    ) -> Result<Comment, AppError> {
        param.validate()?;

        let txn = self.db.begin().await?;
        let repo = CommentRepository::new(&txn);

        check_authority(&repo, article_id, comment_id, requester_id).await?;

        if !repo
            .update_contents(comment_id, requester_id, param.contents)
            .await?
        {
            return Err(AppError::not_found(EntityKind::Comment, comment_id));
        }

        let updated = repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Comment, comment_id))?;

        txn.commit().await?;

        tracing::debug!(comment_id, requester_id, "Updated comment");

        Ok(updated)
    }

    /// Permanently deletes a comment. Only the author may do this.
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted
    /// - `Err(AppError::NotFound)` - No comment with that ID
    /// - `Err(AppError::AuthErr(AuthorMismatch))` - Requester is not the author
    pub async fn delete(&self, comment_id: i32, requester_id: i32) -> Result<(), AppError> {
        self.delete_scoped(None, comment_id, requester_id).await
    }

    /// Like [`Self::delete`], addressed through the article the comment belongs to.
    pub async fn delete_on_article(
        &self,
        article_id: i32,
        comment_id: i32,
        requester_id: i32,
    ) -> Result<(), AppError> {
        self.delete_scoped(Some(article_id), comment_id, requester_id)
            .await
    }

    async fn delete_scoped(
        &self,
        article_id: Option<i32>,
        comment_id: i32,
        requester_id: i32,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = CommentRepository::new(&txn);

        check_authority(&repo, article_id, comment_id, requester_id).await?;

        if !repo.delete(comment_id, requester_id).await? {
            return Err(AppError::not_found(EntityKind::Comment, comment_id));
        }

        txn.commit().await?;

        tracing::debug!(comment_id, requester_id, "Deleted comment");

        Ok(())
    }
}

/// Looks up a comment and rejects requesters who are not its author.
///
/// With `article_id` set, a comment on another article counts as missing. Runs before any
/// mutation so a mismatch never changes state.
async fn check_authority<C: ConnectionTrait>(
    repo: &CommentRepository<'_, C>,
    article_id: Option<i32>,
    comment_id: i32,
    requester_id: i32,
) -> Result<Comment, AppError> {
    let comment = repo
        .find_by_id(comment_id)
        .await?
        .filter(|comment| article_id.is_none_or(|id| comment.article_id == id))
        .ok_or_else(|| AppError::not_found(EntityKind::Comment, comment_id))?;

    if comment.author_id != requester_id {
        return Err(AuthError::AuthorMismatch {
            kind: EntityKind::Comment,
            id: comment_id,
            requester_id,
        }
        .into());
    }

    Ok(comment)
}
