//! JWT signing and verification

use chrono::Duration;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use cf_shared::config::JwtConfig;

use crate::domain::entities::token::{LinkClaims, SessionClaims, TokenPurpose};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};

/// Service for signing and verifying time-bounded JWTs.
///
/// Stateless; a pure function of the input token and the static signing key.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
    issuer: String,
}

impl TokenSigner {
    /// Creates a new token signer from the process-wide JWT configuration
    pub fn new(config: &JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
            default_ttl: Duration::seconds(config.default_expiry),
            issuer: config.issuer.clone(),
        }
    }

    /// Signs a single-action link token for the given email and purpose.
    ///
    /// `ttl` overrides the configured default expiry (1 hour for password
    /// resets, 7 days for create-password invitations).
    pub fn sign_link_token(
        &self,
        email: &str,
        purpose: TokenPurpose,
        ttl: Option<Duration>,
    ) -> DomainResult<String> {
        let claims = LinkClaims::new(email, purpose, ttl.unwrap_or(self.default_ttl), &self.issuer);
        self.encode_jwt(&claims)
    }

    /// Signs a session access token for an authenticated user
    pub fn sign_session_token(&self, user: &User) -> DomainResult<String> {
        let claims = SessionClaims::new(user.id, &user.email, self.default_ttl, &self.issuer);
        self.encode_jwt(&claims)
    }

    /// Verifies a link token and returns its claims
    pub fn verify_link_token(&self, token: &str) -> DomainResult<LinkClaims> {
        self.decode_jwt(token)
    }

    /// Verifies a session token and returns its claims
    pub fn verify_session_token(&self, token: &str) -> DomainResult<SessionClaims> {
        self.decode_jwt(token)
    }

    fn encode_jwt<T: Serialize>(&self, claims: &T) -> DomainResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    fn decode_jwt<T: DeserializeOwned>(&self, token: &str) -> DomainResult<T> {
        let token_data = decode::<T>(token, &self.decoding_key, &self.validation).map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                DomainError::Token(TokenError::TokenExpired)
            } else {
                DomainError::Token(TokenError::InvalidToken)
            }
        })?;

        Ok(token_data.claims)
    }
}
