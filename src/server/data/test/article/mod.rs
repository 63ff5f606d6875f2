use crate::server::{data::article::ArticleRepository, model::article::ArticleContentParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_paginated;
mod update;

fn content(title: &str, cover_url: Option<&str>, contents: &str) -> ArticleContentParam {
    ArticleContentParam {
        title: title.to_string(),
        cover_url: cover_url.map(str::to_string),
        contents: contents.to_string(),
    }
}
