//! Repository layer for the token table

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor};

/// Issued token row
#[derive(Debug, Clone, FromRow)]
pub struct TokenRow {
    pub id: i64,
    pub value: String,
    pub user_id: i64,
    #[sqlx(rename = "type")]
    pub token_type: String,
    pub valid: bool,
    pub expire_date: DateTime<Utc>,
}

pub struct TokenRepository;

impl TokenRepository {
    /// Invalidate all currently-valid tokens of one type for a user.
    /// Runs in the same transaction as the insert of the replacement,
    /// which is what keeps sessions single-active.
    pub async fn invalidate_for_user(
        exec: impl PgExecutor<'_>,
        user_id: i64,
        token_type: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(r#"UPDATE tokens SET valid = false WHERE user_id = $1 AND type = $2 AND valid = true"#)
            .bind(user_id)
            .bind(token_type)
            .execute(exec)
            .await?;
        Ok(())
    }

    pub async fn insert(
        exec: impl PgExecutor<'_>,
        value: &str,
        user_id: i64,
        token_type: &str,
        expire_date: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"INSERT INTO tokens (value, user_id, type, expire_date) VALUES ($1, $2, $3, $4)"#,
        )
        .bind(value)
        .bind(user_id)
        .bind(token_type)
        .bind(expire_date)
        .execute(exec)
        .await?;
        Ok(())
    }

    /// Look up a still-valid token row by value and type
    pub async fn find_valid(
        exec: impl PgExecutor<'_>,
        value: &str,
        token_type: &str,
    ) -> Result<Option<TokenRow>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, value, user_id, type, valid, expire_date
               FROM tokens
               WHERE value = $1 AND type = $2 AND valid = true"#,
        )
        .bind(value)
        .bind(token_type)
        .fetch_optional(exec)
        .await
    }
}
