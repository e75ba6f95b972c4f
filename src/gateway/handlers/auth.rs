//! Authentication handlers: register, login, email verification and the
//! token maintenance endpoints

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, created, ok};
use crate::auth::{AuthResponse, LoginRequest};
use crate::user::{RegisterRequest, UserService};

/// Register a new user
///
/// POST /api/v1/auth/register
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, verification email sent", body = ApiResponse<i64>),
        (status = 400, description = "Invalid email or password (min 8 chars)"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<i64> {
    match UserService::register(&state.db, &state.auth, state.mailer.clone(), req).await {
        Ok(user_id) => created(user_id),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Login with email and password
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid credentials or unverified email")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(e.to_string()).into_err();
    }

    match state.auth.login(req).await {
        Ok(resp) => ok(resp),
        Err(e) => {
            tracing::warn!("Login failed: {:?}", e);
            ApiError::from(e).into_err()
        }
    }
}

/// Confirm an email address from a verification link
///
/// GET /api/v1/auth/verify-email/{token}
#[utoipa::path(
    get,
    path = "/api/v1/auth/verify-email/{token}",
    params(
        ("token" = String, Path, description = "Verification token from the email link")
    ),
    responses(
        (status = 200, description = "Email verified"),
        (status = 400, description = "Invalid or expired token"),
        (status = 409, description = "Email already verified")
    ),
    tag = "Auth"
)]
pub async fn verify_email(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> ApiResult<()> {
    match UserService::verify_email(&state.db, &state.auth, &token).await {
        Ok(()) => ok(()),
        Err(e) => ApiError::from(e).into_err(),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Exchange a refresh token for a fresh access token
///
/// POST /api/v1/auth/refresh
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token issued", body = ApiResponse<AccessTokenResponse>),
        (status = 401, description = "Refresh token invalid, expired or revoked")
    ),
    tag = "Auth"
)]
pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RefreshRequest>,
) -> ApiResult<AccessTokenResponse> {
    if req.refresh_token.is_empty() {
        return ApiError::bad_request("No refresh token found").into_err();
    }

    match state.auth.refresh(&req.refresh_token).await {
        Ok(access_token) => ok(AccessTokenResponse { access_token }),
        Err(e) => ApiError::from(e).into_err(),
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,
}

/// Request a password-reset link
///
/// POST /api/v1/auth/forgot-password
#[utoipa::path(
    post,
    path = "/api/v1/auth/forgot-password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Password reset email sent"),
        (status = 404, description = "No verified user with this email")
    ),
    tag = "Auth"
)]
pub async fn forgot_password(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ForgotPasswordRequest>,
) -> ApiResult<()> {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(e.to_string()).into_err();
    }

    match state.auth.forgot_password(state.mailer.clone(), &req.email).await {
        Ok(()) => ok(()),
        Err(e) => ApiError::from(e).into_err(),
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordRequest {
    pub token: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Complete a password reset
///
/// POST /api/v1/auth/reset-password
#[utoipa::path(
    post,
    path = "/api/v1/auth/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password reset"),
        (status = 400, description = "Password too short"),
        (status = 401, description = "Invalid or expired reset token")
    ),
    tag = "Auth"
)]
pub async fn reset_password(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResetPasswordRequest>,
) -> ApiResult<()> {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(e.to_string()).into_err();
    }

    match state.auth.reset_password(&req.token, &req.password).await {
        Ok(()) => ok(()),
        Err(e) => ApiError::from(e).into_err(),
    }
}
