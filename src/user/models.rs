//! User data models

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full user row. Never serialized to the API (carries the password
/// hash); handlers expose [`UserDetails`] instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    /// Nulled on soft delete; the address moves to `archived_email`
    pub email: Option<String>,
    pub password: String,
    pub verified: bool,
    pub archived: bool,
    pub archived_email: Option<String>,
    pub super_user: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

/// Public projection of a user
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserDetails {
    pub id: i64,
    pub email: Option<String>,
    pub super_user: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}
