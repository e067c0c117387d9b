//! User repository trait defining the interface for user data persistence.
//!
//! Implementations handle the actual database operations while maintaining
//! the abstraction boundary between the domain and infrastructure layers.
//! The trait is async-first and uses Result types for error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their phone number (E.164 format)
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Create a new user in the repository
    ///
    /// Implementations enforce uniqueness of email, username and phone; a
    /// racing duplicate surfaces as a `DuplicateUser` error even when the
    /// caller's own pre-checks passed.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user in the repository
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
