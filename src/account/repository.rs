//! Repository layer for account and membership rows
//!
//! Each function runs one filtered statement. Everything takes
//! `impl PgExecutor` so the same query works against the pool or inside a
//! caller-held transaction handle.

use sqlx::{PgExecutor, Row};

use super::models::{Account, AccountSummary, Membership};

pub struct AccountRepository;

impl AccountRepository {
    /// Get an account by id regardless of archive state
    pub async fn get(
        exec: impl PgExecutor<'_>,
        account_id: i64,
    ) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, name, owner, balance, overdraft, archived, create_date, update_date
               FROM accounts WHERE id = $1"#,
        )
        .bind(account_id)
        .fetch_optional(exec)
        .await
    }

    /// Get an account by id, taking a row-level lock.
    ///
    /// Every guarded mutation goes through this read so concurrent
    /// balance posts, deletes and ownership changes on the same account
    /// serialize at the store.
    pub async fn get_for_update(
        exec: impl PgExecutor<'_>,
        account_id: i64,
    ) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, name, owner, balance, overdraft, archived, create_date, update_date
               FROM accounts WHERE id = $1
               FOR UPDATE"#,
        )
        .bind(account_id)
        .fetch_optional(exec)
        .await
    }

    /// Get a non-archived account owned by the given user
    pub async fn get_for_owner(
        exec: impl PgExecutor<'_>,
        owner_id: i64,
        account_id: i64,
    ) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, name, owner, balance, overdraft, archived, create_date, update_date
               FROM accounts WHERE owner = $1 AND id = $2 AND archived = false"#,
        )
        .bind(owner_id)
        .bind(account_id)
        .fetch_optional(exec)
        .await
    }

    /// List the non-archived accounts a user can see, via their memberships
    pub async fn list_for_user(
        exec: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<Vec<AccountSummary>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT a.id, a.name, a.balance
               FROM users u
               JOIN account_users au ON au.user_id = u.id
               JOIN accounts a ON a.id = au.account_id
               WHERE u.email = $1 AND au.archived = false AND a.archived = false
               ORDER BY a.id"#,
        )
        .bind(email)
        .fetch_all(exec)
        .await
    }

    pub async fn insert(
        exec: impl PgExecutor<'_>,
        name: &str,
        owner_id: i64,
    ) -> Result<i64, sqlx::Error> {
        let row = sqlx::query(r#"INSERT INTO accounts (name, owner) VALUES ($1, $2) RETURNING id"#)
            .bind(name)
            .bind(owner_id)
            .fetch_one(exec)
            .await?;

        Ok(row.get("id"))
    }

    pub async fn set_owner(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        new_owner_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"UPDATE accounts SET owner = $1, update_date = current_timestamp WHERE id = $2"#,
        )
        .bind(new_owner_id)
        .bind(account_id)
        .execute(exec)
        .await?;
        Ok(())
    }

    pub async fn set_overdraft(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        overdraft: bool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"UPDATE accounts SET overdraft = $1, update_date = current_timestamp WHERE id = $2"#,
        )
        .bind(overdraft)
        .bind(account_id)
        .execute(exec)
        .await?;
        Ok(())
    }

    /// Relative balance update. Always `balance = balance + delta` in one
    /// statement; the cached balance is never written from a value
    /// computed outside the store.
    pub async fn adjust_balance(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        delta: rust_decimal::Decimal,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"UPDATE accounts
               SET balance = balance + $1, update_date = current_timestamp
               WHERE id = $2"#,
        )
        .bind(delta)
        .bind(account_id)
        .execute(exec)
        .await?;
        Ok(())
    }

    pub async fn archive(exec: impl PgExecutor<'_>, account_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"UPDATE accounts SET archived = true, update_date = current_timestamp WHERE id = $1"#,
        )
        .bind(account_id)
        .execute(exec)
        .await?;
        Ok(())
    }
}

pub struct MembershipRepository;

impl MembershipRepository {
    /// Find the active membership row for an (account, user) pair
    pub async fn find(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        user_id: i64,
    ) -> Result<Option<Membership>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, account_id, user_id, archived, create_date, update_date
               FROM account_users
               WHERE account_id = $1 AND user_id = $2 AND archived = false"#,
        )
        .bind(account_id)
        .bind(user_id)
        .fetch_optional(exec)
        .await
    }

    /// Resolve an active member's user id by email
    pub async fn find_user_id_by_email(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        email: &str,
    ) -> Result<Option<i64>, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT u.id
               FROM account_users au
               JOIN users u ON u.id = au.user_id
               WHERE au.account_id = $1 AND u.email = $2
                 AND au.archived = false AND u.archived = false"#,
        )
        .bind(account_id)
        .bind(email)
        .fetch_optional(exec)
        .await?;

        Ok(row.map(|r| r.get("id")))
    }

    pub async fn list_active(
        exec: impl PgExecutor<'_>,
        account_id: i64,
    ) -> Result<Vec<Membership>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, account_id, user_id, archived, create_date, update_date
               FROM account_users
               WHERE account_id = $1 AND archived = false
               ORDER BY id"#,
        )
        .bind(account_id)
        .fetch_all(exec)
        .await
    }

    pub async fn insert(
        exec: impl PgExecutor<'_>,
        account_id: i64,
        user_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(r#"INSERT INTO account_users (account_id, user_id) VALUES ($1, $2)"#)
            .bind(account_id)
            .bind(user_id)
            .execute(exec)
            .await?;
        Ok(())
    }

    pub async fn archive_for_account(
        exec: impl PgExecutor<'_>,
        account_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"UPDATE account_users
               SET archived = true, update_date = current_timestamp
               WHERE account_id = $1 AND archived = false"#,
        )
        .bind(account_id)
        .execute(exec)
        .await?;
        Ok(())
    }
}
