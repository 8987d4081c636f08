//! Mock implementation of DeniedTokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::DeniedToken;
use crate::errors::DomainError;

use super::trait_::DeniedTokenRepository;

/// Mock denylist repository for testing
#[derive(Clone)]
pub struct MockDeniedTokenRepository {
    entries: Arc<RwLock<HashMap<(Uuid, String), DeniedToken>>>,
}

impl MockDeniedTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for MockDeniedTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeniedTokenRepository for MockDeniedTokenRepository {
    async fn save_denied_token(&self, entry: DeniedToken) -> Result<DeniedToken, DomainError> {
        let mut entries = self.entries.write().await;
        let key = (entry.user_id, entry.token.clone());

        // get-or-create: the first row for a pair wins
        let stored = entries.entry(key).or_insert(entry);
        Ok(stored.clone())
    }

    async fn find_denied_token(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<Option<DeniedToken>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&(user_id, token.to_string())).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = MockDeniedTokenRepository::new();
        let user_id = Uuid::new_v4();

        repo.save_denied_token(DeniedToken::new(user_id, "tok"))
            .await
            .unwrap();

        let found = repo.find_denied_token(user_id, "tok").await.unwrap();
        assert!(found.is_some());

        assert!(repo.find_denied_token(user_id, "other").await.unwrap().is_none());
        assert!(repo
            .find_denied_token(Uuid::new_v4(), "tok")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        let repo = MockDeniedTokenRepository::new();
        let user_id = Uuid::new_v4();

        let first = repo
            .save_denied_token(DeniedToken::new(user_id, "tok"))
            .await
            .unwrap();
        let second = repo
            .save_denied_token(DeniedToken::new(user_id, "tok"))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(repo.len().await, 1);
    }
}
