//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    server::error::validation::{ValidationError, MAX_COMMENT_LENGTH},
};

/// Comment on an article together with its author's display name.
///
/// `id`, `article_id` and `author_id` never change after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub article_id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub contents: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Converts the comment domain model to a DTO for API responses.
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            article_id: self.article_id,
            author_id: self.author_id,
            author_name: self.author_name,
            contents: self.contents,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts a comment entity and its author's name into a domain model.
    pub fn from_entity(entity: entity::comment::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            author_id: entity.author_id,
            author_name,
            contents: entity.contents,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a comment. Article and author come from the path and session.
#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub contents: String,
}

impl CreateCommentParam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_contents(&self.contents)
    }
}

impl From<CreateCommentDto> for CreateCommentParam {
    fn from(dto: CreateCommentDto) -> Self {
        Self {
            contents: dto.contents,
        }
    }
}

/// Parameters for replacing a comment's contents.
#[derive(Debug, Clone)]
pub struct UpdateCommentParam {
    pub contents: String,
}

impl UpdateCommentParam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_contents(&self.contents)
    }
}

impl From<UpdateCommentDto> for UpdateCommentParam {
    fn from(dto: UpdateCommentDto) -> Self {
        Self {
            contents: dto.contents,
        }
    }
}

fn validate_contents(contents: &str) -> Result<(), ValidationError> {
    if contents.trim().is_empty() {
        return Err(ValidationError::BlankCommentContents);
    }

    let length = contents.chars().count();
    if length > MAX_COMMENT_LENGTH {
        return Err(ValidationError::CommentContentsTooLong {
            max: MAX_COMMENT_LENGTH,
            actual: length,
        });
    }

    Ok(())
}
