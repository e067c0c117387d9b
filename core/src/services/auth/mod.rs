//! Authentication service module
//!
//! This module provides the account lifecycle flows:
//! - registration with duplicate checking and email verification
//! - login with verified-account gating
//! - password reset and create-password link flows

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::PasswordHasher;
pub use service::{AuthService, RegisterRequest};
