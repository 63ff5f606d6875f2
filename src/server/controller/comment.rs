use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::{Comment, CreateCommentParam, UpdateCommentParam},
        service::comment::CommentService,
        state::AppState,
    },
};

pub static COMMENT_TAG: &str = "comment";

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Comments in creation order; empty for unknown articles", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .find_all_by_article(article_id)
        .await?;

    let dto: Vec<CommentDto> = comments.into_iter().map(Comment::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Blank or too long contents", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(article_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let comment = CommentService::new(&state.db)
        .create(article_id, user.id, CreateCommentParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment found", body = CommentDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db).find_by_id(comment_id).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/articles/{article_id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Blank or too long contents", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Requester is not the author", body = ErrorDto),
        (status = 404, description = "Comment not found on this article", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path((article_id, comment_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let comment = CommentService::new(&state.db)
        .update_on_article(
            article_id,
            comment_id,
            user.id,
            UpdateCommentParam::from(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Requester is not the author", body = ErrorDto),
        (status = 404, description = "Comment not found on this article", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path((article_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    CommentService::new(&state.db)
        .delete_on_article(article_id, comment_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
