//! Repository interfaces for the stores the token subsystem depends on.

pub mod denylist;
pub mod user;

pub use denylist::DeniedTokenRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use denylist::MockDeniedTokenRepository;
#[cfg(test)]
pub use user::MockUserRepository;
