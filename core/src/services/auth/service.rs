//! Main authentication service implementation

use chrono::Duration;
use serde::Deserialize;
use std::sync::Arc;

use cf_shared::types::response::{ApiResponse, Empty};
use cf_shared::utils::validation;

use crate::domain::entities::token::{
    TokenPurpose, CREATE_PASSWORD_TOKEN_TTL_SECS, RESET_TOKEN_TTL_SECS,
};
use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthResponse, RegisteredUser};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::UserRepository;
use crate::services::encryption::TokenEncryption;
use crate::services::mailer::Mailer;
use crate::services::token::TokenSigner;

use super::config::AuthServiceConfig;
use super::password::PasswordHasher;

/// Registration input
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub phone: Option<String>,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Authentication service for the complete account lifecycle
///
/// Stateless between calls; all state lives in the user repository. The
/// signing and encryption services are injected so there is no ambient
/// configuration to reach for.
pub struct AuthService<U, M, E>
where
    U: UserRepository,
    M: Mailer,
    E: TokenEncryption,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Outbound transactional email
    mailer: Arc<M>,
    /// Signs and verifies link and session tokens
    token_signer: Arc<TokenSigner>,
    /// Encrypts signed tokens before they enter URLs
    token_encryption: Arc<E>,
    /// Password hashing with the configured work factor
    password_hasher: PasswordHasher,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, M, E> AuthService<U, M, E>
where
    U: UserRepository,
    M: Mailer,
    E: TokenEncryption,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        mailer: Arc<M>,
        token_signer: Arc<TokenSigner>,
        token_encryption: Arc<E>,
        config: AuthServiceConfig,
    ) -> Self {
        let password_hasher = PasswordHasher::new(config.bcrypt_cost);
        Self {
            user_repository,
            mailer,
            token_signer,
            token_encryption,
            password_hasher,
            config,
        }
    }

    /// Register a new user account
    ///
    /// This method:
    /// 1. Validates the input fields
    /// 2. Checks email, username and phone for existing accounts
    /// 3. Hashes the password
    /// 4. Creates the (unverified) user record
    /// 5. Emails a verification link carrying an encrypted signed token
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> DomainResult<ApiResponse<RegisteredUser>> {
        Self::validate_registration(&request)?;

        // Duplicate checks run before the (expensive) password hash
        let mut conflicts = Vec::new();
        if self
            .user_repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            conflicts.push("email");
        }
        if self
            .user_repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            conflicts.push("username");
        }
        if let Some(phone) = &request.phone {
            if self.user_repository.find_by_phone(phone).await?.is_some() {
                conflicts.push("phone");
            }
        }
        if !conflicts.is_empty() {
            return Err(AuthError::DuplicateUser {
                fields: conflicts.join(", "),
            }
            .into());
        }

        let password_hash = self.password_hasher.hash(&request.password)?;
        let user = User::new(
            request.email,
            request.username,
            request.phone,
            password_hash,
            request.first_name,
            request.last_name,
        );
        let user = self.user_repository.create(user).await?;

        // Verification links use the signer's default expiry
        let link = self.build_link(&user.email, TokenPurpose::EmailVerification, None)?;
        self.mailer
            .send_verification_email(&user.email, &user.first_name, &link)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to send verification email: {}", e),
            })?;

        tracing::info!(user_id = %user.id, "registered new user");

        Ok(ApiResponse::success(
            "Registration successful. Please check your email to verify your account.",
            RegisteredUser::from_user(&user),
        ))
    }

    /// Authenticate a user and issue a session token
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<ApiResponse<AuthResponse>> {
        // Unknown email and wrong password produce the same error so the
        // response cannot be used to enumerate accounts.
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        // Checked only after the password matched: a probe with a wrong
        // password must not learn the account's verification state.
        if !user.is_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        let access_token = self.token_signer.sign_session_token(&user)?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(ApiResponse::success(
            "Login successful",
            AuthResponse { access_token },
        ))
    }

    /// Email a password reset link valid for one hour
    ///
    /// The response is identical whether or not the account exists; only the
    /// mailer observes the difference.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<ApiResponse<Empty>> {
        match self.user_repository.find_by_email(email).await? {
            Some(user) => {
                let link = self.build_link(
                    &user.email,
                    TokenPurpose::PasswordReset,
                    Some(Duration::seconds(RESET_TOKEN_TTL_SECS)),
                )?;
                if let Err(e) = self
                    .mailer
                    .send_password_reset_email(&user.email, &user.first_name, &link)
                    .await
                {
                    // Still return the generic success; a distinct failure
                    // here would reveal that the account exists.
                    tracing::error!(error = %e, "failed to send password reset email");
                }
            }
            None => {
                tracing::debug!("password reset requested for unknown email");
            }
        }

        Ok(ApiResponse::message(
            "If an account with this email exists, a password reset link has been sent.",
        ))
    }

    /// Email a create-password link valid for seven days
    ///
    /// Used for newly provisioned accounts that have no password yet. Same
    /// non-enumeration contract as [`Self::forgot_password`].
    pub async fn send_create_password_email(&self, email: &str) -> DomainResult<ApiResponse<Empty>> {
        match self.user_repository.find_by_email(email).await? {
            Some(user) => {
                let link = self.build_link(
                    &user.email,
                    TokenPurpose::PasswordReset,
                    Some(Duration::seconds(CREATE_PASSWORD_TOKEN_TTL_SECS)),
                )?;
                if let Err(e) = self
                    .mailer
                    .send_create_password_email(&user.email, &user.first_name, &link)
                    .await
                {
                    tracing::error!(error = %e, "failed to send create password email");
                }
            }
            None => {
                tracing::debug!("create password requested for unknown email");
            }
        }

        Ok(ApiResponse::message(
            "If an account with this email exists, a link to set your password has been sent.",
        ))
    }

    /// Set a new password using a reset link token
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> DomainResult<ApiResponse<Empty>> {
        let mut user = self
            .consume_link_token(token, TokenPurpose::PasswordReset)
            .await?;

        if !validation::is_valid_password(new_password) {
            return Err(ValidationError::PasswordTooShort {
                min: validation::MIN_PASSWORD_LENGTH,
            }
            .into());
        }

        // Policy check; runs before the new password is hashed
        if self
            .password_hasher
            .verify(new_password, &user.password_hash)
        {
            return Err(AuthError::PasswordReuse.into());
        }

        let password_hash = self.password_hasher.hash(new_password)?;
        user.set_password_hash(password_hash);
        let user = self.user_repository.update(user).await?;

        tracing::info!(user_id = %user.id, "password reset completed");

        Ok(ApiResponse::message("Password has been reset successfully."))
    }

    /// Mark the account behind a verification link token as verified
    pub async fn verify_email(&self, token: &str) -> DomainResult<ApiResponse<Empty>> {
        let mut user = self
            .consume_link_token(token, TokenPurpose::EmailVerification)
            .await?;

        // Verifying an already-verified account is a no-op, not an error
        if !user.is_verified {
            user.verify();
            let user = self.user_repository.update(user).await?;
            tracing::info!(user_id = %user.id, "email verified");
        }

        Ok(ApiResponse::message("Email verified successfully."))
    }

    /// Decrypt, verify and authorize a link token, returning its user.
    ///
    /// Order matters: decryption runs before signature verification, the
    /// purpose tag is checked on every consumption, and a missing user is
    /// reported as a bad token so this path cannot probe which accounts
    /// exist.
    async fn consume_link_token(
        &self,
        sealed: &str,
        expected: TokenPurpose,
    ) -> DomainResult<User> {
        let jwt = self
            .token_encryption
            .decrypt_token(sealed)
            .map_err(|e| Self::classify_link_error(e, expected))?;

        let claims = self
            .token_signer
            .verify_link_token(&jwt)
            .map_err(|e| Self::classify_link_error(e, expected))?;

        if claims.purpose != expected {
            return Err(AuthError::InvalidLinkToken.into());
        }

        self.user_repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AuthError::InvalidLinkToken.into())
    }

    /// Map token-layer failures onto the user-facing taxonomy.
    ///
    /// Expiry keeps a flow-specific message; every other token failure
    /// collapses into one generic error so the caller cannot tell which
    /// stage rejected the token.
    fn classify_link_error(error: DomainError, purpose: TokenPurpose) -> DomainError {
        match error {
            DomainError::Token(TokenError::TokenExpired) => match purpose {
                TokenPurpose::PasswordReset => AuthError::ResetTokenExpired.into(),
                TokenPurpose::EmailVerification => AuthError::VerificationTokenExpired.into(),
            },
            DomainError::Token(_) => AuthError::InvalidLinkToken.into(),
            other => other,
        }
    }

    fn build_link(
        &self,
        email: &str,
        purpose: TokenPurpose,
        ttl: Option<Duration>,
    ) -> DomainResult<String> {
        let token = self.token_signer.sign_link_token(email, purpose, ttl)?;
        let sealed = self.token_encryption.encrypt_token(&token)?;
        let path = match purpose {
            TokenPurpose::EmailVerification => "verify-email",
            TokenPurpose::PasswordReset => "reset-password",
        };
        Ok(format!(
            "{}/{}?token={}",
            self.config.frontend_url, path, sealed
        ))
    }

    fn validate_registration(request: &RegisterRequest) -> DomainResult<()> {
        if request.first_name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "firstName".to_string(),
            }
            .into());
        }
        if request.last_name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "lastName".to_string(),
            }
            .into());
        }
        if !validation::is_valid_email(&request.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !validation::is_valid_username(&request.username) {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
            }
            .into());
        }
        if let Some(phone) = &request.phone {
            if !validation::is_valid_phone(phone) {
                return Err(ValidationError::InvalidPhoneFormat.into());
            }
        }
        if !validation::is_valid_password(&request.password) {
            return Err(ValidationError::PasswordTooShort {
                min: validation::MIN_PASSWORD_LENGTH,
            }
            .into());
        }
        Ok(())
    }
}
