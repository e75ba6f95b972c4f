//! Repository layer for ledger rows

use rust_decimal::Decimal;
use sqlx::PgExecutor;

use super::models::Transaction;

pub struct TransactionRepository;

impl TransactionRepository {
    /// Active transactions for an account, newest first
    pub async fn list_for_account(
        exec: impl PgExecutor<'_>,
        account_id: i64,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, account_id, user_id, amount, description, archived, create_date
               FROM transactions
               WHERE account_id = $1 AND archived = false
               ORDER BY id DESC"#,
        )
        .bind(account_id)
        .fetch_all(exec)
        .await
    }

    pub async fn insert(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        user_id: i64,
        amount: Decimal,
        description: &str,
    ) -> Result<Transaction, sqlx::Error> {
        sqlx::query_as(
            r#"INSERT INTO transactions (account_id, user_id, amount, description)
               VALUES ($1, $2, $3, $4)
               RETURNING id, account_id, user_id, amount, description, archived, create_date"#,
        )
        .bind(account_id)
        .bind(user_id)
        .bind(amount)
        .bind(description)
        .fetch_one(exec)
        .await
    }

    /// Soft-delete cascade used when the owning account is archived
    pub async fn archive_for_account(
        exec: impl PgExecutor<'_>,
        account_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"UPDATE transactions
               SET archived = true, update_date = current_timestamp
               WHERE account_id = $1 AND archived = false"#,
        )
        .bind(account_id)
        .execute(exec)
        .await?;
        Ok(())
    }

    /// Authoritative sum of active entries; the cached account balance
    /// must always equal this
    pub async fn sum_for_account(
        exec: impl PgExecutor<'_>,
        account_id: i64,
    ) -> Result<Decimal, sqlx::Error> {
        use sqlx::Row;

        let row = sqlx::query(
            r#"SELECT COALESCE(SUM(amount), 0) AS total
               FROM transactions
               WHERE account_id = $1 AND archived = false"#,
        )
        .bind(account_id)
        .fetch_one(exec)
        .await?;

        Ok(row.get("total"))
    }
}
