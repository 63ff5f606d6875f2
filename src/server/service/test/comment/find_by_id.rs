use super::*;

/// Tests any caller can read a comment.
///
/// Expected: Ok with the stored comment
#[tokio::test]
async fn finds_existing_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, article, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let found = CommentService::new(db).find_by_id(comment.id).await?;

    assert_eq!(found.id, comment.id);
    assert_eq!(found.article_id, article.id);
    assert_eq!(found.author_id, user.id);
    assert_eq!(found.author_name, user.name);
    assert_eq!(found.contents, comment.contents);

    Ok(())
}

/// Tests reading a comment that does not exist.
///
/// Expected: Err(NotFound Comment)
#[tokio::test]
async fn fails_for_missing_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentService::new(db).find_by_id(5).await;

    assert!(is_not_found(&result.unwrap_err(), EntityKind::Comment, 5));

    Ok(())
}
