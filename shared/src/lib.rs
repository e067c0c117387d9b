//! Shared utilities and common types for the CampusFlow backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The uniform API response envelope
//! - Validation utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, JwtConfig};
pub use types::{ApiResponse, Empty, Meta};
pub use utils::validation;
