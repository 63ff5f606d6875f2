use super::*;

/// Tests fetching a user by ID.
///
/// Expected: Ok for an existing user, Err(NotFound User) otherwise
#[tokio::test]
async fn gets_user_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = AuthService::new(db);

    assert_eq!(service.get_user(user.id).await?.email, user.email);
    assert!(matches!(
        service.get_user(user.id + 1).await,
        Err(AppError::NotFound {
            kind: EntityKind::User,
            ..
        })
    ));

    Ok(())
}
