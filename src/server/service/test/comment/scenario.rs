use super::*;

/// Tests a full create, list, forbidden edit, edit, read cycle.
///
/// Expected: Ok with the comment listed, the intruder rejected and the author's edit visible
#[tokio::test]
async fn create_list_edit_cycle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let other = factory::user::create_user(db).await?;

    let service = CommentService::new(db);

    let created = service
        .create(article.id, author.id, create_param("hi"))
        .await?;

    let listed = service.find_all_by_article(article.id).await?;
    assert!(listed
        .iter()
        .any(|c| c.id == created.id && c.contents == "hi"));

    let forbidden = service
        .update(created.id, other.id, update_param("bye"))
        .await;
    assert!(matches!(
        forbidden,
        Err(AppError::AuthErr(AuthError::AuthorMismatch { .. }))
    ));

    service
        .update(created.id, author.id, update_param("bye"))
        .await?;

    let found = service.find_by_id(created.id).await?;
    assert_eq!(found.contents, "bye");

    Ok(())
}
