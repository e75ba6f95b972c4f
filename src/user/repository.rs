//! Repository layer for user rows

use sqlx::{PgExecutor, Row};

use super::models::{User, UserDetails};

pub struct UserRepository;

impl UserRepository {
    /// Find a non-archived user by email
    pub async fn find_active_by_email(
        exec: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, email, password, verified, archived, archived_email, super_user,
                      create_date, update_date
               FROM users WHERE email = $1 AND archived = false"#,
        )
        .bind(email)
        .fetch_optional(exec)
        .await
    }

    /// Find a verified, non-archived user by email (login path)
    pub async fn find_verified_by_email(
        exec: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, email, password, verified, archived, archived_email, super_user,
                      create_date, update_date
               FROM users WHERE email = $1 AND verified = true AND archived = false"#,
        )
        .bind(email)
        .fetch_optional(exec)
        .await
    }

    /// Find a verified, non-archived user by id (password reset path)
    pub async fn find_verified_by_id(
        exec: impl PgExecutor<'_>,
        user_id: i64,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, email, password, verified, archived, archived_email, super_user,
                      create_date, update_date
               FROM users WHERE id = $1 AND verified = true AND archived = false"#,
        )
        .bind(user_id)
        .fetch_optional(exec)
        .await
    }

    pub async fn insert(
        exec: impl PgExecutor<'_>,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, sqlx::Error> {
        let row = sqlx::query(r#"INSERT INTO users (email, password) VALUES ($1, $2) RETURNING id"#)
            .bind(email)
            .bind(password_hash)
            .fetch_one(exec)
            .await?;

        Ok(row.get("id"))
    }

    /// Create the empty profile row that accompanies every registration
    pub async fn insert_details(
        exec: impl PgExecutor<'_>,
        user_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(r#"INSERT INTO user_details (user_id) VALUES ($1)"#)
            .bind(user_id)
            .execute(exec)
            .await?;
        Ok(())
    }

    pub async fn set_verified_by_email(
        exec: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"UPDATE users SET verified = true, update_date = current_timestamp WHERE email = $1"#,
        )
        .bind(email)
        .execute(exec)
        .await?;
        Ok(())
    }

    pub async fn set_password(
        exec: impl PgExecutor<'_>,
        user_id: i64,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"UPDATE users SET password = $1, update_date = current_timestamp WHERE id = $2"#,
        )
        .bind(password_hash)
        .bind(user_id)
        .execute(exec)
        .await?;
        Ok(())
    }

    /// Soft delete: null the email (frees it for re-registration), stash
    /// it in `archived_email`, scrub the password, drop privileges.
    /// The row itself stays so transaction attribution survives.
    pub async fn soft_delete_by_email(
        exec: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"UPDATE users
               SET email = NULL,
                   archived = true,
                   archived_email = $1,
                   super_user = false,
                   password = 'DELETED',
                   update_date = current_timestamp
               WHERE email = $2"#,
        )
        .bind(email)
        .bind(email)
        .execute(exec)
        .await?;
        Ok(())
    }

    pub async fn get_details_by_email(
        exec: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<Option<UserDetails>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, email, super_user, create_date, update_date
               FROM users WHERE email = $1 AND archived = false"#,
        )
        .bind(email)
        .fetch_optional(exec)
        .await
    }
}
