use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Email is already verified")]
    AlreadyVerified,

    #[error("User not found")]
    NotFound,

    #[error("Users may only delete their own account")]
    Forbidden,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Auth(#[from] crate::auth::AuthError),
}
