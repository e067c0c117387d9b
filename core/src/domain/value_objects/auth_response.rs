//! Response payloads produced by the authentication operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Payload returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Public view of a user, safe to echo back to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
}

/// Payload returned by a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub user: UserSummary,
}

impl RegisteredUser {
    pub fn from_user(user: &User) -> Self {
        Self {
            user: UserSummary {
                id: user.id,
                email: user.email.clone(),
            },
        }
    }
}
