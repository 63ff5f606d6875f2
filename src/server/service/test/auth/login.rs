use super::*;

/// Tests logging in with the password used at signup.
///
/// Expected: Ok with the registered user
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let registered = service
        .signup(signup_param("writer@example.com", "password123"))
        .await?;

    let user = service
        .login(login_param("writer@example.com", "password123"))
        .await?;

    assert_eq!(user.id, registered.id);
    assert_eq!(user.email, registered.email);

    Ok(())
}

/// Tests a wrong password and an unknown email fail the same way.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .signup(signup_param("writer@example.com", "password123"))
        .await?;

    assert!(matches!(
        service
            .login(login_param("writer@example.com", "wrong-password"))
            .await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service
            .login(login_param("nobody@example.com", "password123"))
            .await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
