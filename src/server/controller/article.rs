use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        article::{ArticleDto, CreateArticleDto, PaginatedArticlesDto, UpdateArticleDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::article::ArticleContentParam,
        service::article::ArticleService,
        state::AppState,
    },
};

pub static ARTICLE_TAG: &str = "article";

#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of articles, newest first", body = PaginatedArticlesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_paginated_articles(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = ArticleService::new(&state.db)
        .get_paginated(pagination.page, pagination.entries)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Article published", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let article = ArticleService::new(&state.db)
        .create(user.id, ArticleContentParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article found", body = ArticleDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db).get_by_id(article_id).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Article updated", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Requester is not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    session: Session,
    Path(article_id): Path<i32>,
    Json(payload): Json<UpdateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let article = ArticleService::new(&state.db)
        .update(article_id, user.id, ArticleContentParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 204, description = "Article and its comments deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Requester is not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    session: Session,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    ArticleService::new(&state.db)
        .delete(article_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
