//! Authentication and token configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Default token expiry in seconds, applied when an operation does not
    /// request a specific lifetime
    pub default_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            default_expiry: 86_400, // 24 hours
            issuer: String::from("campus-flow"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the default token expiry in hours
    pub fn with_default_expiry_hours(mut self, hours: i64) -> Self {
        self.default_expiry = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

/// Complete authentication configuration
///
/// Constructed once at process start and passed by reference into the token
/// signer, token encryption and auth service constructors.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Base64-encoded 256-bit key used to encrypt signed link tokens
    pub encryption_key: String,

    /// Frontend base URL used when building the links placed in emails
    pub frontend_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            // base64 of a 32-byte development-only key
            encryption_key: String::from("MDEyMzQ1Njc4OWFiY2RlZjAxMjM0NTY3ODlhYmNkZWY="),
            frontend_url: String::from("http://localhost:3000"),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| JwtConfig::default().secret);
        let default_expiry = std::env::var("JWT_DEFAULT_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);
        let encryption_key = std::env::var("TOKEN_ENCRYPTION_KEY")
            .unwrap_or_else(|_| AuthConfig::default().encryption_key);
        let frontend_url = std::env::var("FRONTEND_URL")
            .unwrap_or_else(|_| String::from("http://localhost:3000"));

        Self {
            jwt: JwtConfig {
                secret,
                default_expiry,
                issuer: String::from("campus-flow"),
            },
            encryption_key,
            frontend_url,
        }
    }
}
