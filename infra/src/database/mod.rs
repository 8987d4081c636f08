//! Database access layer - MySQL via SQLx

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlDeniedTokenRepository, MySqlUserRepository};
