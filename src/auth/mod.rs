//! Token-based authentication: argon2 password hashing, JWT issuance
//! with a best-effort single-active-session token table, and the axum
//! bearer middleware.

pub mod error;
pub mod middleware;
pub mod repository;
pub mod service;

pub use error::AuthError;
pub use middleware::jwt_auth_middleware;
pub use repository::TokenRepository;
pub use service::{AuthResponse, AuthService, Claims, LoginRequest, TokenType};
