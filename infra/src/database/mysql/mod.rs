//! MySQL repository implementations

pub mod denied_token_repository_impl;
pub mod user_repository_impl;

pub use denied_token_repository_impl::MySqlDeniedTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
