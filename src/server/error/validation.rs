use thiserror::Error;

/// Maximum length in characters of a comment body.
pub const MAX_COMMENT_LENGTH: usize = 255;
/// Maximum length in characters of an article title.
pub const MAX_TITLE_LENGTH: usize = 255;
/// Maximum length in characters of an article cover URL.
pub const MAX_COVER_URL_LENGTH: usize = 2048;
/// Maximum length in characters of an email address.
pub const MAX_EMAIL_LENGTH: usize = 255;
/// Maximum length in characters of a user display name.
pub const MAX_NAME_LENGTH: usize = 50;
/// Minimum length in characters of a password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Request payload violates a field constraint.
///
/// Every variant results in 400 Bad Request with the error message returned to the client.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Comment contents must not be blank")]
    BlankCommentContents,

    #[error("Comment contents must be at most {max} characters, got {actual}")]
    CommentContentsTooLong { max: usize, actual: usize },

    #[error("Article title must not be blank")]
    BlankTitle,

    #[error("Article title must be at most {max} characters, got {actual}")]
    TitleTooLong { max: usize, actual: usize },

    #[error("Article contents must not be blank")]
    BlankArticleContents,

    #[error("Cover URL must be at most {max} characters, got {actual}")]
    CoverUrlTooLong { max: usize, actual: usize },

    #[error("Email address is invalid")]
    InvalidEmail,

    #[error("Name must not be blank")]
    BlankName,

    #[error("Name must be at most {max} characters, got {actual}")]
    NameTooLong { max: usize, actual: usize },

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}
