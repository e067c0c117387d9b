//! Claim sets carried by the signed tokens issued by the platform.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifetime of a password reset link (1 hour)
pub const RESET_TOKEN_TTL_SECS: i64 = 3_600;

/// Lifetime of a create-password invitation link (7 days)
pub const CREATE_PASSWORD_TOKEN_TTL_SECS: i64 = 7 * 24 * 3_600;

/// JWT issuer
pub const JWT_ISSUER: &str = "campus-flow";

/// Purpose tag carried by link tokens.
///
/// Checked on every consumption so that a token issued for one flow cannot
/// be replayed against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    EmailVerification,
    PasswordReset,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::EmailVerification => "email_verification",
            TokenPurpose::PasswordReset => "password_reset",
        }
    }
}

/// Claims carried by a single-action link token (email verification,
/// password reset). The purpose tag serializes as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkClaims {
    /// Subject email address the token acts upon
    pub sub: String,

    /// Purpose tag
    #[serde(rename = "type")]
    pub purpose: TokenPurpose,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl LinkClaims {
    /// Creates new claims for a link token
    pub fn new(email: &str, purpose: TokenPurpose, ttl: Duration, issuer: &str) -> Self {
        let now = Utc::now();
        let expiry = now + ttl;

        Self {
            sub: email.to_string(),
            purpose,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Claims carried by the session access token issued at login.
///
/// Session tokens carry no purpose tag; they are structurally different from
/// link tokens and represent a session, not a single-use action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Email address of the authenticated user
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl SessionClaims {
    /// Creates new claims for a session token
    pub fn new(user_id: Uuid, email: &str, ttl: Duration, issuer: &str) -> Self {
        let now = Utc::now();
        let expiry = now + ttl;

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}
