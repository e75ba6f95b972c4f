//! Notification handlers

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, created, ok};
use crate::auth::Claims;
use crate::notification::{Notification, NotificationRepository};

/// All notifications for the authenticated user, oldest first
///
/// GET /api/v1/notifications
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    responses(
        (status = 200, description = "Notifications (possibly empty)", body = ApiResponse<Vec<Notification>>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Vec<Notification>> {
    match NotificationRepository::list_for_user(state.db.pool(), claims.user_id()).await {
        Ok(notifications) => ok(notifications),
        Err(e) => {
            tracing::error!("Notification store failure: {:?}", e);
            ApiError::internal().into_err()
        }
    }
}

/// One notification by id
///
/// GET /api/v1/notifications/{notification_id}
#[utoipa::path(
    get,
    path = "/api/v1/notifications/{notification_id}",
    params(
        ("notification_id" = i64, Path, description = "Notification id")
    ),
    responses(
        (status = 200, description = "Notification", body = ApiResponse<Notification>),
        (status = 404, description = "No notification found")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn get_notification(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(notification_id): Path<i64>,
) -> ApiResult<Notification> {
    match NotificationRepository::get(state.db.pool(), claims.user_id(), notification_id).await {
        Ok(Some(notification)) => ok(notification),
        Ok(None) => ApiError::not_found("No notification found").into_err(),
        Err(e) => {
            tracing::error!("Notification store failure: {:?}", e);
            ApiError::internal().into_err()
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNotificationRequest {
    #[schema(example = "Your statement is ready")]
    pub message: String,
}

/// Create a notification for the authenticated user
///
/// POST /api/v1/notifications
#[utoipa::path(
    post,
    path = "/api/v1/notifications",
    request_body = CreateNotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = ApiResponse<Notification>),
        (status = 400, description = "Empty message")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn create_notification(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateNotificationRequest>,
) -> ApiResult<Notification> {
    if req.message.trim().is_empty() {
        return ApiError::bad_request("Message cannot be empty").into_err();
    }

    match NotificationRepository::insert(state.db.pool(), claims.user_id(), &req.message).await {
        Ok(notification) => created(notification),
        Err(e) => {
            tracing::error!("Notification store failure: {:?}", e);
            ApiError::internal().into_err()
        }
    }
}

/// Mark one notification as read
///
/// PATCH /api/v1/notifications/{notification_id}
#[utoipa::path(
    patch,
    path = "/api/v1/notifications/{notification_id}",
    params(
        ("notification_id" = i64, Path, description = "Notification id")
    ),
    responses(
        (status = 200, description = "Notification dismissed"),
        (status = 404, description = "No notification found")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn dismiss_notification(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(notification_id): Path<i64>,
) -> ApiResult<()> {
    match NotificationRepository::dismiss(state.db.pool(), claims.user_id(), notification_id).await
    {
        Ok(true) => ok(()),
        Ok(false) => ApiError::not_found("No notification found").into_err(),
        Err(e) => {
            tracing::error!("Notification store failure: {:?}", e);
            ApiError::internal().into_err()
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DismissedCount {
    pub dismissed: u64,
}

/// Mark every unread notification as read
///
/// POST /api/v1/notifications/dismiss-all
#[utoipa::path(
    post,
    path = "/api/v1/notifications/dismiss-all",
    responses(
        (status = 200, description = "Unread notifications dismissed", body = ApiResponse<DismissedCount>)
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn dismiss_all_notifications(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<DismissedCount> {
    match NotificationRepository::dismiss_all(state.db.pool(), claims.user_id()).await {
        Ok(dismissed) => ok(DismissedCount { dismissed }),
        Err(e) => {
            tracing::error!("Notification store failure: {:?}", e);
            ApiError::internal().into_err()
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UnreadCount {
    pub unread: i64,
}

/// Count of unread notifications
///
/// GET /api/v1/notifications/unread-count
#[utoipa::path(
    get,
    path = "/api/v1/notifications/unread-count",
    responses(
        (status = 200, description = "Unread count", body = ApiResponse<UnreadCount>)
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn unread_count(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<UnreadCount> {
    match NotificationRepository::unread_count(state.db.pool(), claims.user_id()).await {
        Ok(unread) => ok(UnreadCount { unread }),
        Err(e) => {
            tracing::error!("Notification store failure: {:?}", e);
            ApiError::internal().into_err()
        }
    }
}
