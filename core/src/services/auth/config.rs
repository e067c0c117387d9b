//! Configuration for the authentication service

use cf_shared::config::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Frontend base URL used when building the links placed in emails
    pub frontend_url: String,
    /// bcrypt work factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:3000".to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthServiceConfig {
    /// Build from the process-wide auth configuration
    pub fn from_auth_config(config: &AuthConfig) -> Self {
        Self {
            frontend_url: config.frontend_url.clone(),
            ..Default::default()
        }
    }
}
