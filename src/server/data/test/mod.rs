mod article;
mod comment;
mod user;
