//! API response envelope, error codes and the canonical error mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::AccountError;
use crate::auth::AuthError;
use crate::ledger::LedgerError;
use crate::user::UserError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const AUTH_FAILED: i32 = 2002;
    pub const FORBIDDEN: i32 = 2003;

    // State conflicts (3xxx)
    pub const OVERDRAFT_REJECTED: i32 = 3001;
    pub const ALREADY_MEMBER: i32 = 3002;
    pub const TARGET_NOT_MEMBER: i32 = 3003;
    pub const NON_ZERO_BALANCE: i32 = 3004;
    pub const EMAIL_TAKEN: i32 = 3005;
    pub const ALREADY_VERIFIED: i32 = 3006;

    // Resource errors (4xxx)
    pub const NOT_FOUND: i32 = 4001;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

// ============================================================================
// ApiError
// ============================================================================

/// Error half of [`ApiResult`]: carries the status code and envelope
/// fields for one rejected request
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 success wrapper
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 success wrapper
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_codes::AUTH_FAILED, msg)
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, error_codes::FORBIDDEN, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, msg)
    }

    pub fn conflict(code: i32, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, code, msg)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "Server error",
        )
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            msg,
        )
    }

    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiResponse::<()>::error(self.code, self.msg)),
        )
            .into_response()
    }
}

// ============================================================================
// Canonical service-error mapping (total: one arm per error kind)
// ============================================================================

impl From<LedgerError> for ApiError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::Database(err) => {
                tracing::error!("Ledger store failure: {:?}", err);
                ApiError::internal()
            }
            LedgerError::NotFound => ApiError::not_found(e.to_string()),
            LedgerError::NotMember => ApiError::forbidden(e.to_string()),
            // A state precondition, not an auth failure
            LedgerError::OverdraftRejected => {
                ApiError::conflict(error_codes::OVERDRAFT_REJECTED, e.to_string())
            }
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::Database(err) => {
                tracing::error!("Account store failure: {:?}", err);
                ApiError::internal()
            }
            AccountError::NotFound => ApiError::not_found(e.to_string()),
            AccountError::NotOwner => ApiError::forbidden(e.to_string()),
            AccountError::UserNotFound => ApiError::not_found(e.to_string()),
            AccountError::AlreadyMember => {
                ApiError::conflict(error_codes::ALREADY_MEMBER, e.to_string())
            }
            AccountError::TargetNotMember => {
                ApiError::conflict(error_codes::TARGET_NOT_MEMBER, e.to_string())
            }
            AccountError::NonZeroBalance => {
                ApiError::conflict(error_codes::NON_ZERO_BALANCE, e.to_string())
            }
            AccountError::EmptyName => ApiError::bad_request(e.to_string()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::Database(err) => {
                tracing::error!("User store failure: {:?}", err);
                ApiError::internal()
            }
            UserError::EmailTaken => ApiError::conflict(error_codes::EMAIL_TAKEN, e.to_string()),
            UserError::InvalidToken => ApiError::bad_request(e.to_string()),
            UserError::AlreadyVerified => {
                ApiError::conflict(error_codes::ALREADY_VERIFIED, e.to_string())
            }
            UserError::NotFound => ApiError::not_found(e.to_string()),
            UserError::Forbidden => ApiError::forbidden(e.to_string()),
            UserError::Validation(msg) => ApiError::bad_request(msg),
            UserError::Auth(inner) => inner.into(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Database(err) => {
                tracing::error!("Auth store failure: {:?}", err);
                ApiError::internal()
            }
            AuthError::InvalidCredentials => ApiError::unauthenticated(e.to_string()),
            AuthError::InvalidToken => ApiError::unauthenticated(e.to_string()),
            AuthError::UserNotFound => ApiError::not_found(e.to_string()),
            AuthError::Hashing | AuthError::Signing => {
                tracing::error!("Auth failure: {:?}", e);
                ApiError::internal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::success(42);
        assert_eq!(resp.code, error_codes::SUCCESS);
        assert_eq!(resp.msg, "ok");
        assert_eq!(resp.data, Some(42));
    }

    #[test]
    fn test_error_envelope_has_no_data() {
        let resp = ApiResponse::<()>::error(error_codes::NOT_FOUND, "missing");
        assert_eq!(resp.code, error_codes::NOT_FOUND);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("data"));
    }

    #[test]
    fn test_overdraft_maps_to_conflict_not_unauthorized() {
        let err = ApiError::from(LedgerError::OverdraftRejected);
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, error_codes::OVERDRAFT_REJECTED);
    }

    #[test]
    fn test_role_failures_map_to_forbidden() {
        assert_eq!(
            ApiError::from(AccountError::NotOwner).status,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(LedgerError::NotMember).status,
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_state_conflicts_map_to_conflict() {
        for err in [
            ApiError::from(AccountError::AlreadyMember),
            ApiError::from(AccountError::TargetNotMember),
            ApiError::from(AccountError::NonZeroBalance),
            ApiError::from(UserError::EmailTaken),
        ] {
            assert_eq!(err.status, StatusCode::CONFLICT);
        }
    }
}
