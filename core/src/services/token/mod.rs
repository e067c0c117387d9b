//! Token signing module
//!
//! Issues and verifies the signed JWTs used by the platform:
//! - single-action link tokens (email verification, password reset)
//! - session access tokens issued at login

mod signer;

#[cfg(test)]
mod tests;

pub use signer::TokenSigner;
