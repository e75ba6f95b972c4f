//! Account lifecycle handlers

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, created, ok};
use crate::account::{Account, AccountService, AccountSummary};
use crate::auth::Claims;

/// List the accounts visible to the authenticated user
///
/// GET /api/v1/accounts
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    responses(
        (status = 200, description = "Accounts the user is a member of", body = ApiResponse<Vec<AccountSummary>>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Vec<AccountSummary>> {
    match AccountService::list_accounts(&state.db, &claims.email).await {
        Ok(accounts) => ok(accounts),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// One account, members only
///
/// GET /api/v1/accounts/{account_id}
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account_id}",
    params(
        ("account_id" = i64, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Account details", body = ApiResponse<Account>),
        (status = 404, description = "Account does not exist or user is not authorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(account_id): Path<i64>,
) -> ApiResult<Account> {
    match AccountService::get_account(&state.db, claims.user_id(), account_id).await {
        Ok(account) => ok(account),
        Err(e) => ApiError::from(e).into_err(),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    #[schema(example = "Household")]
    pub name: String,
}

/// Create an account owned by the authenticated user
///
/// POST /api/v1/accounts
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<i64>),
        (status = 400, description = "Empty account name")
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<i64> {
    match AccountService::create_account(&state.db, claims.user_id(), &req.name).await {
        Ok(account_id) => created(account_id),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Archive an account with all its memberships and transactions.
/// Owner only; balance must be exactly zero.
///
/// DELETE /api/v1/accounts/{account_id}
#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{account_id}",
    params(
        ("account_id" = i64, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Account archived"),
        (status = 403, description = "Requester is not the owner"),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Balance is not zero")
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(account_id): Path<i64>,
) -> ApiResult<()> {
    match AccountService::delete_account(&state.db, claims.user_id(), account_id).await {
        Ok(()) => ok(()),
        Err(e) => ApiError::from(e).into_err(),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMemberRequest {
    #[schema(example = "partner@example.com")]
    pub email: String,
}

/// Grant another user access to the account. Owner only.
///
/// POST /api/v1/accounts/{account_id}/members
#[utoipa::path(
    post,
    path = "/api/v1/accounts/{account_id}/members",
    params(
        ("account_id" = i64, Path, description = "Account id")
    ),
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member added", body = ApiResponse<i64>),
        (status = 403, description = "Requester is not the owner"),
        (status = 404, description = "Account or user not found"),
        (status = 409, description = "User already has access")
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn add_member(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(account_id): Path<i64>,
    Json(req): Json<AddMemberRequest>,
) -> ApiResult<i64> {
    match AccountService::add_member(&state.db, claims.user_id(), account_id, &req.email).await {
        Ok(user_id) => created(user_id),
        Err(e) => ApiError::from(e).into_err(),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferOwnershipRequest {
    #[schema(example = "partner@example.com")]
    pub email: String,
}

/// Hand the owner role to an existing member. Owner only.
///
/// POST /api/v1/accounts/{account_id}/owner
#[utoipa::path(
    post,
    path = "/api/v1/accounts/{account_id}/owner",
    params(
        ("account_id" = i64, Path, description = "Account id")
    ),
    request_body = TransferOwnershipRequest,
    responses(
        (status = 200, description = "Ownership transferred", body = ApiResponse<i64>),
        (status = 403, description = "Requester is not the owner"),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Target is not a member of the account")
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn transfer_ownership(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(account_id): Path<i64>,
    Json(req): Json<TransferOwnershipRequest>,
) -> ApiResult<i64> {
    match AccountService::transfer_ownership(&state.db, claims.user_id(), account_id, &req.email)
        .await
    {
        Ok(new_owner_id) => ok(new_owner_id),
        Err(e) => ApiError::from(e).into_err(),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeOverdraftRequest {
    pub overdraft: bool,
}

/// Flip the overdraft permission flag. Owner only.
///
/// PUT /api/v1/accounts/{account_id}/overdraft
#[utoipa::path(
    put,
    path = "/api/v1/accounts/{account_id}/overdraft",
    params(
        ("account_id" = i64, Path, description = "Account id")
    ),
    request_body = ChangeOverdraftRequest,
    responses(
        (status = 200, description = "Overdraft flag changed"),
        (status = 403, description = "Requester is not the owner"),
        (status = 404, description = "Account not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn change_overdraft(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(account_id): Path<i64>,
    Json(req): Json<ChangeOverdraftRequest>,
) -> ApiResult<()> {
    match AccountService::set_overdraft(&state.db, claims.user_id(), account_id, req.overdraft)
        .await
    {
        Ok(()) => ok(()),
        Err(e) => ApiError::from(e).into_err(),
    }
}
