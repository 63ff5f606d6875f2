use crate::server::{
    error::{auth::AuthError, validation::ValidationError, AppError, EntityKind},
    model::article::ArticleContentParam,
    service::{
        article::{ArticleService, MAX_PER_PAGE},
        comment::CommentService,
    },
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;

fn content(title: &str, contents: &str) -> ArticleContentParam {
    ArticleContentParam {
        title: title.to_string(),
        cover_url: None,
        contents: contents.to_string(),
    }
}
