use crate::server::data::comment::CommentRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod delete_all_by_article_id;
mod update_contents;
