//! # Persistence Layer
//!
//! MySQL implementations of the core repository traits, using SQLx. The
//! domain crate stays free of I/O; everything that touches the database
//! lives here.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlDeniedTokenRepository, MySqlUserRepository};
