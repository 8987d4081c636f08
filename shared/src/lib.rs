//! Shared configuration types for the session token subsystem
//!
//! This crate provides the configuration surface consumed by the domain
//! and infrastructure crates:
//! - Token signing and validation configuration
//! - Database connection configuration

pub mod config;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, TokenConfig};
