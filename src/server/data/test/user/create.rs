use super::*;

/// Tests creating a user.
///
/// Expected: Ok with email and name stored
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(
            "reader@example.com".to_string(),
            "Reader".to_string(),
            "hash".to_string(),
        )
        .await?;

    assert_eq!(user.email, "reader@example.com");
    assert_eq!(user.name, "Reader");

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(
        "dup@example.com".to_string(),
        "First".to_string(),
        "hash".to_string(),
    )
    .await?;

    let result = repo
        .create(
            "dup@example.com".to_string(),
            "Second".to_string(),
            "hash".to_string(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
