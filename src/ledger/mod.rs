//! Transaction ledger and balance engine

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::LedgerError;
pub use models::Transaction;
pub use repository::TransactionRepository;
pub use service::{LedgerService, PostTransactionRequest};
