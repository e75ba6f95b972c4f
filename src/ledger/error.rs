use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Account does not exist")]
    NotFound,

    #[error("User does not have access to this account")]
    NotMember,

    #[error("Overdraft not allowed on this account; balance cannot go below 0")]
    OverdraftRejected,
}
