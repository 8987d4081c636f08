//! Service-level tests over the repository mocks.


use chrono::{TimeZone, Utc};

use crate::domain::entities::user::User;
use crate::repositories::{MockDeniedTokenRepository, MockUserRepository};

use super::{SecretResolver, TokenCodec, TokenService, TokenServiceConfig};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        secret: "test-secret".to_string(),
        ..Default::default()
    }
}

/// A user whose cutoff is far in the past, so backdated tokens crafted
/// by tests are not swept up by the issued-at cutoff.
fn open_cutoff_user(email: &str, username: &str) -> User {
    let mut user = User::new(email, username);
    user.issued_at_cutoff = Utc.timestamp_opt(0, 0).unwrap();
    user
}

async fn service_with_user(
    config: TokenServiceConfig,
) -> (
    TokenService<MockUserRepository, MockDeniedTokenRepository>,
    MockUserRepository,
    MockDeniedTokenRepository,
    User,
) {
    let users = MockUserRepository::new();
    let denylist = MockDeniedTokenRepository::new();
    let user = open_cutoff_user("ana@example.com", "ana");
    users.put(user.clone()).await;

    let service = TokenService::new(users.clone(), denylist.clone(), config);
    (service, users, denylist, user)
}

/// Codec and resolver matching `config`, for crafting tokens the service
/// under test did not issue itself.
fn crafting_tools(config: &TokenServiceConfig) -> (TokenCodec, SecretResolver) {
    let codec = TokenCodec::new(config);
    let secrets = SecretResolver::new(config.secret.clone(), config.per_user_secret_enabled);
    (codec, secrets)
}
