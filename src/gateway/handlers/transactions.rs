//! Ledger handlers

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ApiResult, SignedAmount, created, ok};
use crate::auth::Claims;
use crate::ledger::{LedgerService, PostTransactionRequest, Transaction};

/// Transactions of an account, newest first. Members only.
///
/// GET /api/v1/accounts/{account_id}/transactions
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account_id}/transactions",
    params(
        ("account_id" = i64, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Active transactions", body = ApiResponse<Vec<Transaction>>),
        (status = 403, description = "User does not have access to this account")
    ),
    security(("bearer_auth" = [])),
    tag = "Transactions"
)]
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(account_id): Path<i64>,
) -> ApiResult<Vec<Transaction>> {
    match LedgerService::list_transactions(&state.db, claims.user_id(), account_id).await {
        Ok(transactions) => ok(transactions),
        Err(e) => ApiError::from(e).into_err(),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransactionRequest {
    /// Signed amount: deposits positive, withdrawals negative
    #[schema(value_type = String, example = "-50.00")]
    pub amount: SignedAmount,
    #[serde(default)]
    #[schema(example = "Groceries")]
    pub description: String,
}

/// Post a transaction against the account's balance. Members only;
/// without the overdraft flag the balance cannot go below zero.
///
/// POST /api/v1/accounts/{account_id}/transactions
#[utoipa::path(
    post,
    path = "/api/v1/accounts/{account_id}/transactions",
    params(
        ("account_id" = i64, Path, description = "Account id")
    ),
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction posted", body = ApiResponse<Transaction>),
        (status = 403, description = "User does not have access to this account"),
        (status = 404, description = "Account does not exist"),
        (status = 409, description = "Overdraft not allowed on this account")
    ),
    security(("bearer_auth" = [])),
    tag = "Transactions"
)]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(account_id): Path<i64>,
    Json(req): Json<CreateTransactionRequest>,
) -> ApiResult<Transaction> {
    let request = PostTransactionRequest {
        account_id,
        amount: req.amount.inner(),
        description: req.description,
    };

    match LedgerService::post_transaction(&state.db, claims.user_id(), request).await {
        Ok(transaction) => created(transaction),
        Err(e) => ApiError::from(e).into_err(),
    }
}
