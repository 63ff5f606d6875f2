use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::EntityKind};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request requires a logged-in user. Results in 401 Unauthorized.
    #[error("No user ID in session")]
    UserNotInSession,

    /// The user ID stored in the session no longer exists in the database.
    ///
    /// Results in 401 Unauthorized; the client should log in again.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Login email is unknown or the password does not match.
    ///
    /// Both cases share one variant so responses don't reveal which emails are registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup with an email that already belongs to a user. Results in 409 Conflict.
    #[error("Email {0} is already registered")]
    EmailAlreadyRegistered(String),

    /// The requester is not the author of the record they tried to modify.
    ///
    /// Results in 403 Forbidden.
    #[error("User {requester_id} is not the author of {kind} {id}")]
    AuthorMismatch {
        /// Kind of record the requester tried to modify
        kind: EntityKind,
        /// Identifier of that record
        id: i32,
        /// User who attempted the modification
        requester_id: i32,
    },

    /// Password hashing or hash parsing failed. Results in 500.
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Errors are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - Missing session user, stale session user, bad credentials
/// - 403 Forbidden - Author mismatch
/// - 409 Conflict - Email already registered
/// - 500 Internal Server Error - Password hashing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required".to_string())
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::EmailAlreadyRegistered(_) => (StatusCode::CONFLICT, self.to_string()),
            Self::AuthorMismatch { kind, .. } => (
                StatusCode::FORBIDDEN,
                format!("Only the author can modify this {}", kind.to_string().to_lowercase()),
            ),
            Self::PasswordHash(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
