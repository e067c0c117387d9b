//! Mock mailer that records outbound messages for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::Mailer;

/// Which template a captured email used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    Verification,
    PasswordReset,
    CreatePassword,
}

/// A captured outbound email
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub first_name: String,
    pub link: String,
    pub template: EmailTemplate,
}

/// Mock mailer recording every send instead of delivering
pub struct MockMailer {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    fail_sends: bool,
}

impl MockMailer {
    /// Create a mock mailer that accepts every send
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_sends: false,
        }
    }

    /// Create a mock mailer that fails every send
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_sends: true,
        }
    }

    /// Snapshot of every captured email
    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of captured emails
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Link carried by the most recent captured email
    pub fn last_link(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|e| e.link.clone())
    }

    fn record(
        &self,
        to: &str,
        first_name: &str,
        link: &str,
        template: EmailTemplate,
    ) -> Result<(), String> {
        if self.fail_sends {
            return Err("mock mailer configured to fail".to_string());
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            first_name: first_name.to_string(),
            link: link.to_string(),
            template,
        });
        Ok(())
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_verification_email(
        &self,
        to: &str,
        first_name: &str,
        link: &str,
    ) -> Result<(), String> {
        self.record(to, first_name, link, EmailTemplate::Verification)
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        first_name: &str,
        link: &str,
    ) -> Result<(), String> {
        self.record(to, first_name, link, EmailTemplate::PasswordReset)
    }

    async fn send_create_password_email(
        &self,
        to: &str,
        first_name: &str,
        link: &str,
    ) -> Result<(), String> {
        self.record(to, first_name, link, EmailTemplate::CreatePassword)
    }
}
