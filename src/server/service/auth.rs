//! Signup and login.
//!
//! Passwords are hashed with Argon2 before they reach the data layer; the hash never leaves it
//! except for the credential check in `login`.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError, EntityKind},
    model::user::{LoginParam, SignupParam, User},
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::ValidationErr)` - Email, name or password invalid
    /// - `Err(AuthError::EmailAlreadyRegistered)` - Email taken, including a concurrent signup
    ///   that won the unique constraint
    pub async fn signup(&self, param: SignupParam) -> Result<User, AppError> {
        param.validate()?;

        let repo = UserRepository::new(self.db);

        if repo.email_exists(&param.email).await? {
            return Err(AuthError::EmailAlreadyRegistered(param.email).into());
        }

        let password_hash = hash_password(&param.password)?;
        let email = param.email.clone();

        let user = match repo.create(param.email, param.name, password_hash).await {
            Ok(user) => user,
            Err(err) => {
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    return Err(AuthError::EmailAlreadyRegistered(email).into());
                }
                return Err(err.into());
            }
        };

        tracing::info!(user_id = user.id, "Registered user");

        Ok(user)
    }

    /// Checks email and password.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let Some((user, password_hash)) = UserRepository::new(self.db)
            .find_with_password_hash_by_email(&param.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!(user_id = user.id, "User logged in");

        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::User, user_id))
    }
}
