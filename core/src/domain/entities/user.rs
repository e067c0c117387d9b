//! User entity representing a registered account in the CampusFlow system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address (unique)
    pub email: String,

    /// Username (unique)
    pub username: String,

    /// Phone number in E.164 format (unique, optional)
    pub phone: Option<String>,

    /// bcrypt hash of the password; never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Given name, used when addressing the user in emails
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Whether the user's email address has been verified
    pub is_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unverified user
    pub fn new(
        email: String,
        username: String,
        phone: Option<String>,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            phone,
            password_hash,
            first_name,
            last_name,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the user's email as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
