//! User accounts: registration, verification, soft deletion

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::UserError;
pub use models::{User, UserDetails};
pub use repository::UserRepository;
pub use service::{RegisterRequest, UserService};
