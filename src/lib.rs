//! coffer - Shared bank-account ledger service
//!
//! A REST API over PostgreSQL for shared bank accounts. The core is the
//! balance engine: an account's cached balance always equals the sum of
//! its active transactions, enforced under concurrency by running every
//! guard-then-mutate sequence inside one row-locked store transaction.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`account`] - accounts, memberships, lifecycle engine
//! - [`ledger`] - transactions and the balance/overdraft engine
//! - [`user`] - registration, verification, soft deletion
//! - [`auth`] - password hashing, JWT issuance, bearer middleware
//! - [`notification`] - per-user notifications
//! - [`mailer`] - outbound email collaborator seam
//! - [`gateway`] - axum router, handlers, response envelope

pub mod account;
pub mod auth;
pub mod config;
pub mod db;
pub mod gateway;
pub mod ledger;
pub mod logging;
pub mod mailer;
pub mod notification;
pub mod user;

// Convenient re-exports at crate root
pub use account::{Account, AccountService};
pub use auth::{AuthService, Claims};
pub use config::AppConfig;
pub use db::Database;
pub use ledger::{LedgerService, Transaction};
pub use user::UserService;
