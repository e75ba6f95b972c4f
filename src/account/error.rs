use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Account does not exist or user is not authorized")]
    NotFound,

    #[error("Must be the account owner")]
    NotOwner,

    #[error("User not found")]
    UserNotFound,

    #[error("User already has access to this account")]
    AlreadyMember,

    #[error("New owner must already have access to this account")]
    TargetNotMember,

    #[error("Balance must be 0 to delete an account")]
    NonZeroBalance,

    #[error("Account name cannot be empty")]
    EmptyName,
}
