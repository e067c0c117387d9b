//! Outbound transactional email boundary
//!
//! The actual delivery mechanism (SMTP, provider API) lives in the
//! infrastructure layer; the core only depends on this trait.

pub mod mock;

pub use mock::{EmailTemplate, MockMailer, SentEmail};

use async_trait::async_trait;

/// Trait for transactional email delivery
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the account verification email containing the given link
    async fn send_verification_email(
        &self,
        to: &str,
        first_name: &str,
        link: &str,
    ) -> Result<(), String>;

    /// Send the password reset email containing the given link
    async fn send_password_reset_email(
        &self,
        to: &str,
        first_name: &str,
        link: &str,
    ) -> Result<(), String>;

    /// Send the create-password invitation email containing the given link
    async fn send_create_password_email(
        &self,
        to: &str,
        first_name: &str,
        link: &str,
    ) -> Result<(), String>;
}
