//! Ledger data models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// One posted ledger entry.
///
/// Immutable once created; archival (on account deletion) is the only
/// later mutation. `user_id` records the acting member for audit, the
/// account owns the row for lifecycle purposes.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub user_id: i64,
    pub amount: Decimal,
    pub description: String,
    pub archived: bool,
    pub create_date: DateTime<Utc>,
}
