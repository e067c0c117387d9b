//! Symmetric encryption applied to signed link tokens before they are
//! embedded in outbound URLs.

pub mod token_encryption;

// Re-export main types
pub use token_encryption::{AesGcmTokenEncryption, TokenEncryption};
