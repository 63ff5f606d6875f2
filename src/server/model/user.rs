//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{LoginDto, SignupDto, UserDto},
    server::error::validation::{
        ValidationError, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MIN_PASSWORD_LENGTH,
    },
};

/// Registered user.
///
/// Never carries the password hash; that stays in the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct SignupParam {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl SignupParam {
    /// Checks email shape, name length and password length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;

        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        let name_length = self.name.chars().count();
        if name_length > MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong {
                max: MAX_NAME_LENGTH,
                actual: name_length,
            });
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(())
    }
}

impl From<SignupDto> for SignupParam {
    fn from(dto: SignupDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            name: dto.name,
            password: dto.password,
        }
    }
}

/// Parameters for logging in with email and password.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl From<LoginDto> for LoginParam {
    fn from(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}

/// Accepts `local@domain` where both parts are non-empty, the domain contains a dot that is
/// neither first nor last, and there is no whitespace.
fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.chars().count() > MAX_EMAIL_LENGTH || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };

    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');

    if local.is_empty() || !domain_ok {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
