use super::*;

/// Tests all comments of one article are removed regardless of author.
///
/// Verifies comments on other articles survive.
///
/// Expected: Ok(2) with only the other article's comment left
#[tokio::test]
async fn deletes_every_comment_of_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;
    let other_article = factory::article::create_article(db, author.id).await?;

    factory::comment::create_comment(db, article.id, author.id).await?;
    factory::comment::create_comment(db, article.id, reader.id).await?;
    let kept = factory::comment::create_comment(db, other_article.id, reader.id).await?;

    let removed = CommentRepository::new(db)
        .delete_all_by_article_id(article.id)
        .await?;

    assert_eq!(removed, 2);

    let remaining = entity::prelude::Comment::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}
