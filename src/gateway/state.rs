use std::sync::Arc;

use crate::auth::AuthService;
use crate::db::Database;
use crate::mailer::Mailer;

/// Shared gateway application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub auth: Arc<AuthService>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: Arc<AuthService>, mailer: Arc<dyn Mailer>) -> Self {
        Self { db, auth, mailer }
    }
}
