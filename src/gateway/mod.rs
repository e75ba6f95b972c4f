//! HTTP gateway: router assembly, request-id middleware and serving

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use anyhow::Context;
use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request},
    middleware::{Next, from_fn, from_fn_with_state},
    response::Response,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use uuid::Uuid;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::jwt_auth_middleware;
use crate::config::GatewayConfig;
use state::AppState;

/// Stamp every request with an id, echo it as `X-Request-Id`, and log
/// one line per request with method, path, status and latency.
async fn request_id_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        request_id,
        "request"
    );

    response
}

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/verify-email/{token}", get(handlers::auth::verify_email))
        .route("/refresh", post(handlers::auth::refresh))
        .route("/forgot-password", post(handlers::auth::forgot_password))
        .route("/reset-password", post(handlers::auth::reset_password));

    let user_routes = Router::new()
        .route("/me", get(handlers::users::get_details))
        .route("/{email}", delete(handlers::users::delete_user))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    let account_routes = Router::new()
        .route(
            "/",
            get(handlers::accounts::list_accounts).post(handlers::accounts::create_account),
        )
        .route(
            "/{account_id}",
            get(handlers::accounts::get_account).delete(handlers::accounts::delete_account),
        )
        .route("/{account_id}/members", post(handlers::accounts::add_member))
        .route(
            "/{account_id}/owner",
            post(handlers::accounts::transfer_ownership),
        )
        .route(
            "/{account_id}/overdraft",
            put(handlers::accounts::change_overdraft),
        )
        .route(
            "/{account_id}/transactions",
            get(handlers::transactions::list_transactions)
                .post(handlers::transactions::create_transaction),
        )
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    let notification_routes = Router::new()
        .route(
            "/",
            get(handlers::notifications::list_notifications)
                .post(handlers::notifications::create_notification),
        )
        .route(
            "/unread-count",
            get(handlers::notifications::unread_count),
        )
        .route(
            "/dismiss-all",
            post(handlers::notifications::dismiss_all_notifications),
        )
        .route(
            "/{notification_id}",
            get(handlers::notifications::get_notification)
                .patch(handlers::notifications::dismiss_notification),
        )
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    Router::new()
        .route("/api/v1/health", get(handlers::health::health_check))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/users", user_routes)
        .nest("/api/v1/accounts", account_routes)
        .nest("/api/v1/notifications", notification_routes)
        .layer(from_fn(request_id_middleware))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Bind and serve until the process is stopped
pub async fn serve(config: &GatewayConfig, state: AppState) -> anyhow::Result<()> {
    let state = Arc::new(state);
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
