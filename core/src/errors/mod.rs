//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use cf_shared::types::response::{ApiResponse, Empty};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Auth(AuthError::DuplicateUser { .. }) => "DUPLICATE_RESOURCE",
            DomainError::Auth(AuthError::InvalidCredentials)
            | DomainError::Auth(AuthError::EmailNotVerified) => "UNAUTHORIZED",
            DomainError::Auth(AuthError::ResetTokenExpired)
            | DomainError::Auth(AuthError::VerificationTokenExpired)
            | DomainError::Token(TokenError::TokenExpired) => "TOKEN_EXPIRED",
            DomainError::Auth(AuthError::InvalidLinkToken) | DomainError::Token(_) => {
                "INVALID_TOKEN"
            }
            DomainError::Auth(AuthError::PasswordReuse) | DomainError::ValidationErr(_) => {
                "BAD_REQUEST"
            }
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// HTTP status code this error maps to at the transport boundary
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::Auth(AuthError::DuplicateUser { .. }) => 409,
            DomainError::Auth(AuthError::InvalidCredentials)
            | DomainError::Auth(AuthError::EmailNotVerified) => 401,
            DomainError::Auth(_) | DomainError::Token(_) | DomainError::ValidationErr(_) => 400,
            DomainError::NotFound { .. } => 404,
            DomainError::Internal { .. } => 500,
        }
    }

    /// Build the failure envelope surfaced to the caller.
    ///
    /// Internal errors are replaced with a generic message; the detail only
    /// goes to the log.
    pub fn to_response(&self) -> ApiResponse<Empty> {
        let message = match self {
            DomainError::Internal { message } => {
                tracing::error!(detail = %message, "internal error");
                "Something went wrong. Please try again later.".to_string()
            }
            other => other.to_string(),
        };
        ApiResponse::failure(message)
    }
}
