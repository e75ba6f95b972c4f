//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::account::{Account, AccountSummary};
use crate::auth::{AuthResponse, LoginRequest};
use crate::gateway::handlers::HealthResponse;
use crate::gateway::handlers::accounts::{
    AddMemberRequest, ChangeOverdraftRequest, CreateAccountRequest, TransferOwnershipRequest,
};
use crate::gateway::handlers::auth::{
    AccessTokenResponse, ForgotPasswordRequest, RefreshRequest, ResetPasswordRequest,
};
use crate::gateway::handlers::notifications::{
    CreateNotificationRequest, DismissedCount, UnreadCount,
};
use crate::gateway::handlers::transactions::CreateTransactionRequest;
use crate::ledger::Transaction;
use crate::notification::Notification;
use crate::user::{RegisterRequest, UserDetails};

/// JWT bearer authentication security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coffer Ledger API",
        version = "1.0.0",
        description = "Shared bank-account ledger: overdraft-guarded balances, memberships and token-based auth.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        // Auth
        crate::gateway::handlers::auth::register,
        crate::gateway::handlers::auth::login,
        crate::gateway::handlers::auth::verify_email,
        crate::gateway::handlers::auth::refresh,
        crate::gateway::handlers::auth::forgot_password,
        crate::gateway::handlers::auth::reset_password,
        // Users
        crate::gateway::handlers::users::get_details,
        crate::gateway::handlers::users::delete_user,
        // Accounts
        crate::gateway::handlers::accounts::list_accounts,
        crate::gateway::handlers::accounts::get_account,
        crate::gateway::handlers::accounts::create_account,
        crate::gateway::handlers::accounts::delete_account,
        crate::gateway::handlers::accounts::add_member,
        crate::gateway::handlers::accounts::transfer_ownership,
        crate::gateway::handlers::accounts::change_overdraft,
        // Transactions
        crate::gateway::handlers::transactions::list_transactions,
        crate::gateway::handlers::transactions::create_transaction,
        // Notifications
        crate::gateway::handlers::notifications::list_notifications,
        crate::gateway::handlers::notifications::get_notification,
        crate::gateway::handlers::notifications::create_notification,
        crate::gateway::handlers::notifications::dismiss_notification,
        crate::gateway::handlers::notifications::dismiss_all_notifications,
        crate::gateway::handlers::notifications::unread_count,
    ),
    components(schemas(
        HealthResponse,
        RegisterRequest,
        LoginRequest,
        AuthResponse,
        RefreshRequest,
        AccessTokenResponse,
        ForgotPasswordRequest,
        ResetPasswordRequest,
        UserDetails,
        Account,
        AccountSummary,
        CreateAccountRequest,
        AddMemberRequest,
        TransferOwnershipRequest,
        ChangeOverdraftRequest,
        Transaction,
        CreateTransactionRequest,
        Notification,
        CreateNotificationRequest,
        DismissedCount,
        UnreadCount,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and store health"),
        (name = "Auth", description = "Registration, login and token maintenance"),
        (name = "Users", description = "User profile"),
        (name = "Accounts", description = "Account lifecycle and membership"),
        (name = "Transactions", description = "Ledger postings"),
        (name = "Notifications", description = "Per-user notifications"),
    )
)]
pub struct ApiDoc;
