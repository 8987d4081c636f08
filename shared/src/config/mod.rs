//! Configuration module
//!
//! Organized by concern:
//! - `auth` - Token signing, validation, and refresh configuration
//! - `database` - Database connection and pool configuration

pub mod auth;
pub mod database;

// Re-export commonly used types
pub use auth::TokenConfig;
pub use database::DatabaseConfig;
