use super::*;

/// Tests an existing user can publish an article.
///
/// Expected: Ok with author set to the requester
#[tokio::test]
async fn creates_article_for_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let article = ArticleService::new(db)
        .create(author.id, content("Title", "Body"))
        .await?;

    assert_eq!(article.author_id, author.id);
    assert_eq!(article.title, "Title");
    assert_eq!(article.contents, "Body");

    Ok(())
}

/// Tests publishing as a user that does not exist.
///
/// Expected: Err(NotFound User)
#[tokio::test]
async fn fails_for_missing_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleService::new(db)
        .create(3, content("Title", "Body"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::User,
            id: 3
        })
    ));

    Ok(())
}

/// Tests a blank title is rejected.
///
/// Expected: Err(ValidationErr BlankTitle)
#[tokio::test]
async fn rejects_blank_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let result = ArticleService::new(db)
        .create(author.id, content(" ", "Body"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::BlankTitle))
    ));

    Ok(())
}
