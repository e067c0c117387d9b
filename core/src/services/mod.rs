//! Business services containing domain logic and use cases.

pub mod auth;
pub mod encryption;
pub mod mailer;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, PasswordHasher, RegisterRequest};
pub use encryption::{AesGcmTokenEncryption, TokenEncryption};
pub use mailer::{Mailer, MockMailer};
pub use token::TokenSigner;
