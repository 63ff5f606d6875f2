use super::*;

/// Tests the author can delete an article.
///
/// Expected: Ok(true) with row removed
#[tokio::test]
async fn deletes_article_for_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.delete(article.id, author.id).await?);
    assert!(repo.find_by_id(article.id).await?.is_none());

    Ok(())
}

/// Tests another user's delete does not match the row.
///
/// Expected: Ok(false) with article still present
#[tokio::test]
async fn keeps_article_of_other_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = factory::helpers::create_article_with_author(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let repo = ArticleRepository::new(db);

    assert!(!repo.delete(article.id, intruder.id).await?);
    assert!(repo.exists(article.id).await?);

    Ok(())
}
