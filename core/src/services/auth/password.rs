//! Password hashing and verification

use crate::errors::{DomainError, DomainResult};

/// One-way, salted password hashing with an adaptive work factor.
///
/// Hashing is intentionally slow; the cost is the point, so results are
/// never cached and calls are not parallelized away.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password.
    ///
    /// Salted; two calls with the same input produce different hashes.
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Never errors: a malformed or corrupt hash counts as a non-match, so
    /// callers cannot tell "wrong password" from "corrupt record" apart.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // MIN_COST keeps the suite fast; the production cost comes from
    // AuthServiceConfig and is asserted there.
    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_is_salted_and_verifiable() {
        let hasher = fast_hasher();

        let first = hasher.hash("Secret123!").unwrap();
        let second = hasher.hash("Secret123!").unwrap();

        assert_ne!(first, "Secret123!");
        assert_ne!(first, second);
        assert!(hasher.verify("Secret123!", &first));
        assert!(hasher.verify("Secret123!", &second));
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hasher = fast_hasher();
        let hash = hasher.hash("Secret123!").unwrap();

        assert!(!hasher.verify("secret123!", &hash));
        assert!(!hasher.verify("", &hash));
    }

    #[test]
    fn test_malformed_hash_is_a_non_match() {
        let hasher = fast_hasher();

        assert!(!hasher.verify("Secret123!", "not-a-bcrypt-hash"));
        assert!(!hasher.verify("Secret123!", ""));
    }

    #[test]
    fn test_default_cost_matches_policy() {
        assert_eq!(bcrypt::DEFAULT_COST, 12);
    }
}
