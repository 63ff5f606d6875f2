use super::*;

/// Tests the author can delete a comment.
///
/// Expected: Ok(true) with row removed
#[tokio::test]
async fn deletes_comment_for_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let deleted = CommentRepository::new(db).delete(comment.id, user.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests another user's delete does not match the row.
///
/// Expected: Ok(false) with comment still present
#[tokio::test]
async fn keeps_comment_of_other_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let deleted = CommentRepository::new(db)
        .delete(comment.id, intruder.id)
        .await?;

    assert!(!deleted);
    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.delete(comment.id, user.id).await?);
    assert!(!repo.delete(comment.id, user.id).await?);

    Ok(())
}
