use super::*;

/// Tests finding an existing and a missing user.
///
/// Expected: Ok(Some) then Ok(None)
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found.email, user.email);
    assert!(repo.find_by_id(user.id + 1).await?.is_none());

    Ok(())
}
