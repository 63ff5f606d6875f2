use super::*;

/// Tests the author can replace title, cover and contents.
///
/// Expected: Ok(Some) with new values and unchanged creation time
#[tokio::test]
async fn updates_article_for_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;

    let updated = ArticleRepository::new(db)
        .update(
            article.id,
            author.id,
            content("New title", Some("https://example.com/c.png"), "New body"),
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, article.id);
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.cover_url.as_deref(), Some("https://example.com/c.png"));
    assert_eq!(updated.contents, "New body");
    assert_eq!(updated.created_at, article.created_at);

    Ok(())
}

/// Tests updating can clear the cover.
///
/// Expected: Ok(Some) with cover_url None
#[tokio::test]
async fn clears_cover_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, author.id)
        .cover_url(Some("https://example.com/old.png".to_string()))
        .build()
        .await?;

    let updated = ArticleRepository::new(db)
        .update(article.id, author.id, content("Title", None, "Body"))
        .await?
        .unwrap();

    assert!(updated.cover_url.is_none());

    Ok(())
}

/// Tests another user's update does not match the row.
///
/// Expected: Ok(None) with stored article unchanged
#[tokio::test]
async fn returns_none_for_other_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = factory::helpers::create_article_with_author(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let result = ArticleRepository::new(db)
        .update(article.id, intruder.id, content("Defaced", None, "Body"))
        .await?;

    assert!(result.is_none());

    let stored = entity::prelude::Article::find_by_id(article.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, article.title);

    Ok(())
}
