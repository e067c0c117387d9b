//! Configuration types, immutable after process start.

pub mod auth;

pub use auth::{AuthConfig, JwtConfig};
