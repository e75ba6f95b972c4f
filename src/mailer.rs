//! Outbound mail collaborator
//!
//! Delivery failures are logged, never propagated: a registration or
//! password-reset request must not fail because SMTP is down.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MailerConfig;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_verification_email(&self, email: &str, token: &str) -> anyhow::Result<()>;
    async fn send_password_reset_email(&self, email: &str, token: &str) -> anyhow::Result<()>;
}

/// Default mailer: renders the message to the structured log instead of
/// handing it to an SMTP relay. Deployments wire a real transport behind
/// the same trait.
pub struct LogMailer {
    config: MailerConfig,
}

impl LogMailer {
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_verification_email(&self, email: &str, token: &str) -> anyhow::Result<()> {
        let link = format!("{}/verify-email/{}", self.config.client_url, token);
        tracing::info!(to = email, from = %self.config.from, %link, "verification email queued");
        Ok(())
    }

    async fn send_password_reset_email(&self, email: &str, token: &str) -> anyhow::Result<()> {
        let link = format!("{}/reset-password/{}", self.config.client_url, token);
        tracing::info!(to = email, from = %self.config.from, %link, "password reset email queued");
        Ok(())
    }
}

/// Fire-and-forget dispatch used by the engines.
pub fn spawn_verification_email(mailer: Arc<dyn Mailer>, email: String, token: String) {
    tokio::spawn(async move {
        if let Err(e) = mailer.send_verification_email(&email, &token).await {
            tracing::error!("Failed to send verification email to {}: {:?}", email, e);
        }
    });
}

/// Fire-and-forget dispatch used by the engines.
pub fn spawn_password_reset_email(mailer: Arc<dyn Mailer>, email: String, token: String) {
    tokio::spawn(async move {
        if let Err(e) = mailer.send_password_reset_email(&email, &token).await {
            tracing::error!("Failed to send password reset email to {}: {:?}", email, e);
        }
    });
}
