//! User profile handlers

use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, State},
};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, ok};
use crate::auth::Claims;
use crate::user::{UserDetails, UserService};

/// Details of the authenticated user
///
/// GET /api/v1/users/me
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDetails>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_details(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<UserDetails> {
    match UserService::get_details(&state.db, &claims.email).await {
        Ok(details) => ok(details),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Soft-delete a user account. Self-service only: the path email must
/// match the authenticated principal.
///
/// DELETE /api/v1/users/{email}
#[utoipa::path(
    delete,
    path = "/api/v1/users/{email}",
    params(
        ("email" = String, Path, description = "Email of the account to delete")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not the account of the authenticated user")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(email): Path<String>,
) -> ApiResult<()> {
    match UserService::delete_user(&state.db, &claims.email, &email).await {
        Ok(()) => ok(()),
        Err(e) => ApiError::from(e).into_err(),
    }
}
