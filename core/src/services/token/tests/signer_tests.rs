//! Unit tests for the token signer

use chrono::Duration;

use cf_shared::config::JwtConfig;

use crate::domain::entities::token::TokenPurpose;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::TokenSigner;

fn test_config() -> JwtConfig {
    JwtConfig {
        secret: "unit-test-signing-secret".to_string(),
        default_expiry: 3600,
        issuer: "campus-flow".to_string(),
    }
}

fn sample_user() -> User {
    User::new(
        "a@b.com".to_string(),
        "ab".to_string(),
        None,
        "hash".to_string(),
        "Ada".to_string(),
        "Byron".to_string(),
    )
}

#[test]
fn test_link_token_round_trip() {
    let signer = TokenSigner::new(&test_config());

    let token = signer
        .sign_link_token("a@b.com", TokenPurpose::EmailVerification, None)
        .unwrap();
    let claims = signer.verify_link_token(&token).unwrap();

    assert_eq!(claims.sub, "a@b.com");
    assert_eq!(claims.purpose, TokenPurpose::EmailVerification);
    assert_eq!(claims.iss, "campus-flow");
}

#[test]
fn test_default_expiry_applied() {
    let signer = TokenSigner::new(&test_config());

    let token = signer
        .sign_link_token("a@b.com", TokenPurpose::PasswordReset, None)
        .unwrap();
    let claims = signer.verify_link_token(&token).unwrap();

    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_ttl_override_applied() {
    let signer = TokenSigner::new(&test_config());

    let token = signer
        .sign_link_token("a@b.com", TokenPurpose::PasswordReset, Some(Duration::days(7)))
        .unwrap();
    let claims = signer.verify_link_token(&token).unwrap();

    assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
}

#[test]
fn test_expired_token_fails_with_expired_not_invalid() {
    let signer = TokenSigner::new(&test_config());

    let token = signer
        .sign_link_token("a@b.com", TokenPurpose::PasswordReset, Some(Duration::seconds(-5)))
        .unwrap();
    let err = signer.verify_link_token(&token).unwrap_err();

    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn test_garbage_token_is_invalid() {
    let signer = TokenSigner::new(&test_config());

    let err = signer.verify_link_token("not-a-jwt").unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}

#[test]
fn test_wrong_secret_is_invalid() {
    let signer = TokenSigner::new(&test_config());
    let other = TokenSigner::new(&JwtConfig {
        secret: "a-different-secret".to_string(),
        ..test_config()
    });

    let token = signer
        .sign_link_token("a@b.com", TokenPurpose::PasswordReset, None)
        .unwrap();
    let err = other.verify_link_token(&token).unwrap_err();

    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}

#[test]
fn test_session_token_round_trip() {
    let signer = TokenSigner::new(&test_config());
    let user = sample_user();

    let token = signer.sign_session_token(&user).unwrap();
    let claims = signer.verify_session_token(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, "a@b.com");
}

#[test]
fn test_session_token_is_not_a_valid_link_token() {
    let signer = TokenSigner::new(&test_config());
    let user = sample_user();

    // Session claims carry no purpose tag, so decoding as link claims fails.
    let token = signer.sign_session_token(&user).unwrap();
    let err = signer.verify_link_token(&token).unwrap_err();

    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}
