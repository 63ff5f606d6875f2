use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        article::{ArticleDto, CreateArticleDto, PaginatedArticlesDto, UpdateArticleDto},
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
        user::{LoginDto, SignupDto, UserDto},
    },
    server::{
        controller::{
            article::{self, ARTICLE_TAG},
            auth::{self, AUTH_TAG},
            comment::{self, COMMENT_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "myblog", description = "Articles, comments and accounts"),
    paths(
        auth::signup,
        auth::login,
        auth::logout,
        auth::get_user,
        article::get_paginated_articles,
        article::create_article,
        article::get_article,
        article::update_article,
        article::delete_article,
        comment::get_article_comments,
        comment::create_comment,
        comment::get_comment,
        comment::update_comment,
        comment::delete_comment,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        SignupDto,
        LoginDto,
        ArticleDto,
        CreateArticleDto,
        UpdateArticleDto,
        PaginatedArticlesDto,
        CommentDto,
        CreateCommentDto,
        UpdateCommentDto,
    )),
    tags(
        (name = AUTH_TAG, description = "Signup, login and session"),
        (name = ARTICLE_TAG, description = "Articles"),
        (name = COMMENT_TAG, description = "Comments on articles"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/articles",
            get(article::get_paginated_articles).post(article::create_article),
        )
        .route(
            "/api/articles/{article_id}",
            get(article::get_article)
                .put(article::update_article)
                .delete(article::delete_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(comment::get_article_comments).post(comment::create_comment),
        )
        .route(
            "/api/articles/{article_id}/comments/{comment_id}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
        .route("/api/comments/{comment_id}", get(comment::get_comment))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
