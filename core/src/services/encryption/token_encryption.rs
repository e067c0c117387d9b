//! Link token encryption using AES-256-GCM
//!
//! Link tokens are signed first, then encrypted, so the value a recipient
//! sees in a URL is an opaque ciphertext rather than a readable JWT. On
//! consumption the ciphertext must decrypt successfully before the signature
//! is ever checked.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use base64::{
    engine::general_purpose::{STANDARD as BASE64, URL_SAFE_NO_PAD as BASE64_URL},
    Engine,
};
use rand::{rngs::OsRng, RngCore};

use crate::errors::{DomainError, DomainResult, TokenError};

/// AES-GCM nonce length in bytes
const NONCE_LEN: usize = 12;

/// AES-256 key length in bytes
const KEY_LEN: usize = 32;

/// Trait defining the reversible transform applied to signed link tokens
pub trait TokenEncryption: Send + Sync {
    /// Encrypt a signed token into an opaque, URL-safe string
    fn encrypt_token(&self, plaintext: &str) -> DomainResult<String>;

    /// Decrypt a previously encrypted token
    ///
    /// Fails with `TokenError::DecryptionFailed` on malformed input,
    /// tampering or a wrong key; never panics.
    fn decrypt_token(&self, sealed: &str) -> DomainResult<String>;
}

/// AES-256-GCM based token encryption
pub struct AesGcmTokenEncryption {
    cipher: Aes256Gcm,
}

impl AesGcmTokenEncryption {
    /// Create a new token encryption service from a raw 32-byte key
    pub fn new(key: &[u8]) -> DomainResult<Self> {
        if key.len() != KEY_LEN {
            return Err(DomainError::Internal {
                message: "Invalid key size for AES-256".to_string(),
            });
        }

        let key = Key::<Aes256Gcm>::from_slice(key);
        Ok(Self {
            cipher: Aes256Gcm::new(key),
        })
    }

    /// Create from the base64-encoded key held in configuration
    pub fn from_base64_key(encoded: &str) -> DomainResult<Self> {
        let key = BASE64.decode(encoded).map_err(|e| DomainError::Internal {
            message: format!("Failed to decode encryption key: {}", e),
        })?;
        Self::new(&key)
    }

    /// Generate a random nonce for AES-GCM
    fn generate_nonce() -> [u8; NONCE_LEN] {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);
        nonce
    }
}

impl TokenEncryption for AesGcmTokenEncryption {
    fn encrypt_token(&self, plaintext: &str) -> DomainResult<String> {
        let nonce_bytes = Self::generate_nonce();
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        // nonce || ciphertext, as one URL-safe string
        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);

        Ok(BASE64_URL.encode(sealed))
    }

    fn decrypt_token(&self, sealed: &str) -> DomainResult<String> {
        let raw = BASE64_URL
            .decode(sealed)
            .map_err(|_| DomainError::Token(TokenError::DecryptionFailed))?;

        if raw.len() <= NONCE_LEN {
            return Err(DomainError::Token(TokenError::DecryptionFailed));
        }

        let (nonce_bytes, ciphertext) = raw.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| DomainError::Token(TokenError::DecryptionFailed))?;

        String::from_utf8(plaintext).map_err(|_| DomainError::Token(TokenError::DecryptionFailed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AesGcmTokenEncryption {
        AesGcmTokenEncryption::new(&[7u8; KEY_LEN]).unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let service = test_service();
        let plaintext = "eyJhbGciOiJIUzI1NiJ9.payload.signature";

        let sealed = service.encrypt_token(plaintext).unwrap();
        assert_ne!(sealed, plaintext);

        let recovered = service.decrypt_token(&sealed).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn test_output_is_url_safe() {
        let service = test_service();
        let sealed = service.encrypt_token("some signed token").unwrap();

        assert!(!sealed.contains('+'));
        assert!(!sealed.contains('/'));
        assert!(!sealed.contains('='));
    }

    #[test]
    fn test_fresh_nonce_per_call() {
        let service = test_service();

        let a = service.encrypt_token("same input").unwrap();
        let b = service.encrypt_token("same input").unwrap();

        assert_ne!(a, b);
        assert_eq!(service.decrypt_token(&a).unwrap(), "same input");
        assert_eq!(service.decrypt_token(&b).unwrap(), "same input");
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let service = test_service();
        let sealed = service.encrypt_token("some signed token").unwrap();

        // Flip one byte in the middle of the sealed blob
        let mut raw = BASE64_URL.decode(&sealed).unwrap();
        let mid = raw.len() / 2;
        raw[mid] ^= 0x01;
        let tampered = BASE64_URL.encode(raw);

        let err = service.decrypt_token(&tampered).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::DecryptionFailed)
        ));
    }

    #[test]
    fn test_wrong_key_fails() {
        let service = test_service();
        let other = AesGcmTokenEncryption::new(&[9u8; KEY_LEN]).unwrap();

        let sealed = service.encrypt_token("some signed token").unwrap();
        let err = other.decrypt_token(&sealed).unwrap_err();

        assert!(matches!(
            err,
            DomainError::Token(TokenError::DecryptionFailed)
        ));
    }

    #[test]
    fn test_malformed_inputs_fail_cleanly() {
        let service = test_service();

        for input in ["", "!!!not-base64!!!", "c2hvcnQ"] {
            let err = service.decrypt_token(input).unwrap_err();
            assert!(matches!(
                err,
                DomainError::Token(TokenError::DecryptionFailed)
            ));
        }
    }

    #[test]
    fn test_rejects_wrong_key_size() {
        assert!(AesGcmTokenEncryption::new(&[0u8; 16]).is_err());
    }

    #[test]
    fn test_from_base64_key() {
        let encoded = BASE64.encode([3u8; KEY_LEN]);
        let service = AesGcmTokenEncryption::from_base64_key(&encoded).unwrap();

        let sealed = service.encrypt_token("round trip").unwrap();
        assert_eq!(service.decrypt_token(&sealed).unwrap(), "round trip");
    }
}
