//! Bank account management: accounts, memberships, lifecycle engine

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::AccountError;
pub use models::{Account, AccountSummary, Membership};
pub use repository::{AccountRepository, MembershipRepository};
pub use service::AccountService;
