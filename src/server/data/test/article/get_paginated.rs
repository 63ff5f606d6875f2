use super::*;

/// Tests pages are returned newest first with the overall total.
///
/// Expected: Ok with page 0 holding the two newest and page 1 the oldest
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let oldest = factory::article::create_article(db, author.id).await?;
    let middle = factory::article::create_article(db, author.id).await?;
    let newest = factory::article::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);

    let (first_page, total) = repo.get_paginated(0, 2).await?;
    assert_eq!(total, 3);
    let ids: Vec<i32> = first_page.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);

    let (second_page, _) = repo.get_paginated(1, 2).await?;
    let ids: Vec<i32> = second_page.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![oldest.id]);

    Ok(())
}

/// Tests a page past the end.
///
/// Expected: Ok with no articles and the real total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    factory::article::create_article(db, author.id).await?;

    let (articles, total) = ArticleRepository::new(db).get_paginated(5, 10).await?;

    assert!(articles.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
