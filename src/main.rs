//! coffer - Shared bank-account ledger service
//!
//! Entry point: load config, set up logging, connect to PostgreSQL,
//! bootstrap the schema and serve the gateway.

use std::sync::Arc;

use coffer::auth::AuthService;
use coffer::config::AppConfig;
use coffer::db::Database;
use coffer::gateway::{self, state::AppState};
use coffer::logging;
use coffer::mailer::{LogMailer, Mailer};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = logging::init_logging(&config);

    tracing::info!("coffer starting (env: {})", env);

    let db = Arc::new(Database::connect(&config.postgres_url).await?);
    db.init_schema().await?;

    let auth = Arc::new(AuthService::new(db.pool().clone(), config.auth.clone()));
    let mailer: Arc<dyn Mailer> = Arc::new(LogMailer::new(config.mailer.clone()));

    let state = AppState::new(db, auth, mailer);
    gateway::serve(&config.gateway, state).await
}
