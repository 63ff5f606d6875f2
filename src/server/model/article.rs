//! Article domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::article::{ArticleDto, CreateArticleDto, PaginatedArticlesDto, UpdateArticleDto},
    server::error::validation::{ValidationError, MAX_COVER_URL_LENGTH, MAX_TITLE_LENGTH},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub cover_url: Option<String>,
    pub contents: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Converts the article domain model to a DTO for API responses.
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            author_id: self.author_id,
            title: self.title,
            cover_url: self.cover_url,
            contents: self.contents,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to an article domain model at the repository boundary.
    pub fn from_entity(entity: entity::article::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            title: entity.title,
            cover_url: entity.cover_url,
            contents: entity.contents,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Title, cover and body shared by create and update requests.
#[derive(Debug, Clone)]
pub struct ArticleContentParam {
    pub title: String,
    pub cover_url: Option<String>,
    pub contents: String,
}

impl ArticleContentParam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        let title_length = self.title.chars().count();
        if title_length > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleTooLong {
                max: MAX_TITLE_LENGTH,
                actual: title_length,
            });
        }

        if self.contents.trim().is_empty() {
            return Err(ValidationError::BlankArticleContents);
        }

        if let Some(cover_url) = &self.cover_url {
            let cover_length = cover_url.chars().count();
            if cover_length > MAX_COVER_URL_LENGTH {
                return Err(ValidationError::CoverUrlTooLong {
                    max: MAX_COVER_URL_LENGTH,
                    actual: cover_length,
                });
            }
        }

        Ok(())
    }
}

/// An empty or whitespace-only cover URL means "no cover".
fn normalize_cover_url(cover_url: Option<String>) -> Option<String> {
    cover_url.filter(|url| !url.trim().is_empty())
}

impl From<CreateArticleDto> for ArticleContentParam {
    fn from(dto: CreateArticleDto) -> Self {
        Self {
            title: dto.title,
            cover_url: normalize_cover_url(dto.cover_url),
            contents: dto.contents,
        }
    }
}

impl From<UpdateArticleDto> for ArticleContentParam {
    fn from(dto: UpdateArticleDto) -> Self {
        Self {
            title: dto.title,
            cover_url: normalize_cover_url(dto.cover_url),
            contents: dto.contents,
        }
    }
}

/// One page of articles, newest first, with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedArticles {
    pub articles: Vec<Article>,
    /// Total number of articles across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedArticles {
    pub fn into_dto(self) -> PaginatedArticlesDto {
        PaginatedArticlesDto {
            articles: self.articles.into_iter().map(Article::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
