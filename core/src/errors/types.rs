//! Domain-specific error types for authentication and related operations
//!
//! Every failure branch is a typed variant so callers pattern-match on a
//! discriminant instead of inspecting message text. Messages here are the
//! user-facing ones; internal detail never travels through them.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password. One variant for both so the error
    /// cannot be used to enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Correct credentials but the email was never verified. Distinct from
    /// `InvalidCredentials` by design; the check runs only after the
    /// password matched.
    #[error("Please verify your email address before logging in")]
    EmailNotVerified,

    #[error("User already exists with this {fields}")]
    DuplicateUser { fields: String },

    #[error("New password cannot be the same as the old password")]
    PasswordReuse,

    /// Covers undecryptable, malformed, wrong-purpose tokens and tokens
    /// pointing at a missing user. One message for all sub-cases.
    #[error("Invalid or expired token")]
    InvalidLinkToken,

    #[error("Password reset token has expired")]
    ResetTokenExpired,

    #[error("Verification token has expired")]
    VerificationTokenExpired,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token decryption failed")]
    DecryptionFailed,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid phone number format")]
    InvalidPhoneFormat,

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}
