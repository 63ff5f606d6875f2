use crate::server::{
    error::{auth::AuthError, validation::ValidationError, AppError, EntityKind},
    model::comment::{CreateCommentParam, UpdateCommentParam},
    service::comment::CommentService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod scenario;

fn create_param(contents: &str) -> CreateCommentParam {
    CreateCommentParam {
        contents: contents.to_string(),
    }
}

fn update_param(contents: &str) -> UpdateCommentParam {
    UpdateCommentParam {
        contents: contents.to_string(),
    }
}

fn is_not_found(result: &AppError, expected_kind: EntityKind, expected_id: i32) -> bool {
    matches!(result, AppError::NotFound { kind, id } if *kind == expected_kind && *id == expected_id)
}
