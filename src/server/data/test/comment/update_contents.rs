use super::*;

/// Tests the author can replace a comment's contents.
///
/// Expected: Ok(true) with contents changed and ownership kept
#[tokio::test]
async fn updates_contents_for_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, article, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let updated = CommentRepository::new(db)
        .update_contents(comment.id, user.id, "Edited".to_string())
        .await?;

    assert!(updated);

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.contents, "Edited");
    assert_eq!(stored.article_id, article.id);
    assert_eq!(stored.author_id, user.id);
    assert_eq!(stored.created_at, comment.created_at);
    assert!(stored.updated_at >= comment.updated_at);

    Ok(())
}

/// Tests another user's update does not match the row.
///
/// Expected: Ok(false) with contents unchanged
#[tokio::test]
async fn leaves_comment_of_other_author_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let updated = CommentRepository::new(db)
        .update_contents(comment.id, intruder.id, "Hijacked".to_string())
        .await?;

    assert!(!updated);

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.contents, comment.contents);

    Ok(())
}

/// Tests updating a comment that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = CommentRepository::new(db)
        .update_contents(7, user.id, "Nothing".to_string())
        .await?;

    assert!(!updated);

    Ok(())
}
