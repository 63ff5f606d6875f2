use super::*;

/// Tests deleting an article removes its comments too.
///
/// Expected: Ok with article and every comment gone
#[tokio::test]
async fn deletes_article_and_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;
    factory::comment::create_comment(db, article.id, author.id).await?;
    factory::comment::create_comment(db, article.id, reader.id).await?;

    ArticleService::new(db).delete(article.id, author.id).await?;

    assert!(entity::prelude::Article::find_by_id(article.id)
        .one(db)
        .await?
        .is_none());
    assert!(CommentService::new(db)
        .find_all_by_article(article.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests another user cannot delete the article.
///
/// Expected: Err(AuthorMismatch Article) with article and comments intact
#[tokio::test]
async fn forbids_other_requester() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let intruder = factory::user::create_user(db).await?;
    factory::comment::create_comment(db, article.id, author.id).await?;

    let result = ArticleService::new(db).delete(article.id, intruder.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AuthorMismatch {
            kind: EntityKind::Article,
            ..
        }))
    ));
    assert_eq!(
        CommentService::new(db)
            .find_all_by_article(article.id)
            .await?
            .len(),
        1
    );

    Ok(())
}
