//! Repository layer for notification rows
//!
//! Every query is scoped to the owning user id; there is no
//! cross-user read path.

use sqlx::{PgExecutor, Row};

use super::models::Notification;

pub struct NotificationRepository;

impl NotificationRepository {
    pub async fn list_for_user(
        exec: impl PgExecutor<'_>,
        user_id: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, user_id, message, dismissed, create_date
               FROM notifications
               WHERE user_id = $1
               ORDER BY create_date"#,
        )
        .bind(user_id)
        .fetch_all(exec)
        .await
    }

    pub async fn get(
        exec: impl PgExecutor<'_>,
        user_id: i64,
        notification_id: i64,
    ) -> Result<Option<Notification>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, user_id, message, dismissed, create_date
               FROM notifications
               WHERE user_id = $1 AND id = $2"#,
        )
        .bind(user_id)
        .bind(notification_id)
        .fetch_optional(exec)
        .await
    }

    pub async fn insert(
        exec: impl PgExecutor<'_>,
        user_id: i64,
        message: &str,
    ) -> Result<Notification, sqlx::Error> {
        sqlx::query_as(
            r#"INSERT INTO notifications (message, user_id)
               VALUES ($1, $2)
               RETURNING id, user_id, message, dismissed, create_date"#,
        )
        .bind(message)
        .bind(user_id)
        .fetch_one(exec)
        .await
    }

    /// Returns false when no matching row exists for this user
    pub async fn dismiss(
        exec: impl PgExecutor<'_>,
        user_id: i64,
        notification_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"UPDATE notifications
               SET dismissed = true, update_date = current_timestamp
               WHERE user_id = $1 AND id = $2"#,
        )
        .bind(user_id)
        .bind(notification_id)
        .execute(exec)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn dismiss_all(
        exec: impl PgExecutor<'_>,
        user_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"UPDATE notifications
               SET dismissed = true, update_date = current_timestamp
               WHERE user_id = $1 AND dismissed = false"#,
        )
        .bind(user_id)
        .execute(exec)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn unread_count(
        exec: impl PgExecutor<'_>,
        user_id: i64,
    ) -> Result<i64, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT COUNT(*) AS unread
               FROM notifications
               WHERE user_id = $1 AND dismissed = false"#,
        )
        .bind(user_id)
        .fetch_one(exec)
        .await?;

        Ok(row.get("unread"))
    }
}
