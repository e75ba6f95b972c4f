//! Password hashing and token issuance
//!
//! Access and refresh tokens are JWTs signed with separate secrets.
//! Every issued token is also recorded in the `tokens` table, and the
//! insert invalidates the user's previous token of the same type in the
//! same transaction: a best-effort single-active-session model, not a
//! revocation list. Access-token verification is signature-only (no
//! store read); only the refresh path checks the table.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use sqlx::PgPool;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use super::error::AuthError;
use super::repository::TokenRepository;
use crate::config::AuthConfig;
use crate::mailer::{Mailer, spawn_password_reset_email};
use crate::user::UserRepository;

/// Bearer-token claims: the authenticated principal
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id as string
    pub sub: String,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> i64 {
        self.sub.parse().unwrap_or_default()
    }
}

/// Claims carried by email-verification links
#[derive(Debug, Serialize, Deserialize)]
struct EmailClaims {
    email: String,
    exp: usize,
    iat: usize,
}

/// Claims carried by password-reset links
#[derive(Debug, Serialize, Deserialize)]
struct ResetClaims {
    sub: String,
    exp: usize,
    iat: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "AccessToken",
            TokenType::Refresh => "RefreshToken",
        }
    }
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[schema(example = "password123")]
    pub password: String,
}

/// Auth response (token pair)
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: i64,
    pub email: String,
}

fn sign<T: Serialize>(claims: &T, secret: &str) -> Result<String, AuthError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::Signing)
}

fn verify<T: DeserializeOwned>(token: &str, secret: &str) -> Result<T, AuthError> {
    decode::<T>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

pub struct AuthService {
    db: PgPool,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(db: PgPool, config: AuthConfig) -> Self {
        Self { db, config }
    }

    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::Hashing)
    }

    pub fn verify_password(password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// Verify credentials and issue a fresh access/refresh pair.
    /// Only verified, non-archived users can log in; a missing user and
    /// a bad password are the same outcome.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, AuthError> {
        let user = UserRepository::find_verified_by_email(&self.db, &req.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !Self::verify_password(&req.password, &user.password) {
            return Err(AuthError::InvalidCredentials);
        }

        let email = user.email.clone().unwrap_or_default();
        let access_token = self.issue(user.id, &email, TokenType::Access).await?;
        let refresh_token = self.issue(user.id, &email, TokenType::Refresh).await?;

        tracing::info!(user_id = user.id, "login successful");
        Ok(AuthResponse {
            access_token,
            refresh_token,
            user_id: user.id,
            email,
        })
    }

    /// Sign a token and record it, invalidating the user's previous
    /// token of the same type in the same transaction.
    async fn issue(
        &self,
        user_id: i64,
        email: &str,
        token_type: TokenType,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let (ttl, secret) = match token_type {
            TokenType::Access => (
                Duration::minutes(self.config.access_ttl_minutes),
                &self.config.access_secret,
            ),
            TokenType::Refresh => (
                Duration::days(self.config.refresh_ttl_days),
                &self.config.refresh_secret,
            ),
        };
        let expire_date = now + ttl;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: expire_date.timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        let token = sign(&claims, secret)?;

        let mut tx = self.db.begin().await?;
        TokenRepository::invalidate_for_user(&mut *tx, user_id, token_type.as_str()).await?;
        TokenRepository::insert(&mut *tx, &token, user_id, token_type.as_str(), expire_date)
            .await?;
        tx.commit().await?;

        Ok(token)
    }

    /// Signature-only verification of a bearer access token
    pub fn verify_access(&self, token: &str) -> Result<Claims, AuthError> {
        verify(token, &self.config.access_secret)
    }

    /// Exchange a valid refresh token for a new access token. The token
    /// must both exist as a valid row and verify against the refresh
    /// secret.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        TokenRepository::find_valid(&self.db, refresh_token, TokenType::Refresh.as_str())
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let claims: Claims = verify(refresh_token, &self.config.refresh_secret)?;
        self.issue(claims.user_id(), &claims.email, TokenType::Access)
            .await
    }

    /// Short-lived token embedded in verification links
    pub fn sign_email_token(&self, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = EmailClaims {
            email: email.to_string(),
            exp: (now + Duration::minutes(self.config.email_token_ttl_minutes)).timestamp()
                as usize,
            iat: now.timestamp() as usize,
        };
        sign(&claims, &self.config.access_secret)
    }

    /// Decode a verification-link token back to its email
    pub fn verify_email_token(&self, token: &str) -> Result<String, AuthError> {
        let claims: EmailClaims = verify(token, &self.config.access_secret)?;
        Ok(claims.email)
    }

    /// Send a password-reset link. Fire-and-forget: the email leaves
    /// through the mailer collaborator and failures only get logged.
    pub async fn forgot_password(
        &self,
        mailer: Arc<dyn Mailer>,
        email: &str,
    ) -> Result<(), AuthError> {
        let user = UserRepository::find_verified_by_email(&self.db, email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let now = Utc::now();
        let claims = ResetClaims {
            sub: user.id.to_string(),
            exp: (now + Duration::minutes(self.config.email_token_ttl_minutes)).timestamp()
                as usize,
            iat: now.timestamp() as usize,
        };
        let token = sign(&claims, &self.config.access_secret)?;

        spawn_password_reset_email(mailer, email.to_string(), token);
        Ok(())
    }

    /// Complete a password reset started by [`Self::forgot_password`]
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        let claims: ResetClaims = verify(token, &self.config.access_secret)?;
        let user_id = claims.sub.parse::<i64>().map_err(|_| AuthError::InvalidToken)?;

        let user = UserRepository::find_verified_by_id(&self.db, user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let hash = Self::hash_password(new_password)?;
        UserRepository::set_password(&self.db, user.id, &hash).await?;

        tracing::info!(user_id = user.id, "password reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = AuthService::hash_password("correct horse battery").expect("should hash");
        assert!(AuthService::verify_password("correct horse battery", &hash));
        assert!(!AuthService::verify_password("wrong password", &hash));
    }

    #[test]
    fn test_verify_password_rejects_garbage_hash() {
        assert!(!AuthService::verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_claims_sign_and_verify_roundtrip() {
        let now = Utc::now();
        let claims = Claims {
            sub: "42".to_string(),
            email: "user@example.com".to_string(),
            exp: (now + Duration::minutes(15)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = sign(&claims, "secret").expect("should sign");
        let decoded: Claims = verify(&token, "secret").expect("should verify");
        assert_eq!(decoded.user_id(), 42);
        assert_eq!(decoded.email, "user@example.com");
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let now = Utc::now();
        let claims = Claims {
            sub: "1".to_string(),
            email: "a@b.c".to_string(),
            exp: (now + Duration::minutes(15)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = sign(&claims, "secret-a").unwrap();
        let result: Result<Claims, _> = verify(&token, "secret-b");
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let now = Utc::now();
        // Past the default 60s validation leeway
        let claims = Claims {
            sub: "1".to_string(),
            email: "a@b.c".to_string(),
            exp: (now - Duration::minutes(5)).timestamp() as usize,
            iat: (now - Duration::minutes(20)).timestamp() as usize,
        };

        let token = sign(&claims, "secret").unwrap();
        let result: Result<Claims, _> = verify(&token, "secret");
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_token_type_names_match_store_values() {
        assert_eq!(TokenType::Access.as_str(), "AccessToken");
        assert_eq!(TokenType::Refresh.as_str(), "RefreshToken");
    }
}
