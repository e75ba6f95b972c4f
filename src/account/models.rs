//! Data models for bank accounts and memberships

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Bank account row
///
/// `balance` is the cached sum of all non-archived transactions on the
/// account; every mutation keeps the two in lock-step inside one store
/// transaction.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Account {
    pub id: i64,
    pub name: String,
    /// Distinguished member with delete/transfer/configure rights
    pub owner: i64,
    pub balance: Decimal,
    /// Permits the balance to go negative when set
    pub overdraft: bool,
    pub archived: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

/// Slim projection used for the per-user account listing
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AccountSummary {
    pub id: i64,
    pub name: String,
    pub balance: Decimal,
}

/// Membership grant (account_users row)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Membership {
    pub id: i64,
    pub account_id: i64,
    pub user_id: i64,
    pub archived: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}
