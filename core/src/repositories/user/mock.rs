//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert or replace a user record
    pub async fn put(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Remove a user record, simulating account deletion
    pub async fn remove(&self, id: Uuid) -> bool {
        self.users.write().await.remove(&id).is_some()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn set_issued_at_cutoff(
        &self,
        id: Uuid,
        cutoff: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;

        match users.get_mut(&id) {
            Some(user) if cutoff > user.issued_at_cutoff => {
                user.issued_at_cutoff = cutoff;
                user.updated_at = Utc::now();
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_find_by_id_and_email() {
        let repo = MockUserRepository::new();
        let user = User::new("ana@example.com", "ana");
        repo.put(user.clone()).await;

        let by_id = repo.find_by_id(user.id).await.unwrap();
        assert_eq!(by_id, Some(user.clone()));

        let by_email = repo.find_by_email("ana@example.com").await.unwrap();
        assert_eq!(by_email, Some(user));

        assert!(repo.find_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cutoff_is_monotonic() {
        let repo = MockUserRepository::new();
        let user = User::new("ana@example.com", "ana");
        let base = user.issued_at_cutoff;
        repo.put(user.clone()).await;

        let advanced = repo
            .set_issued_at_cutoff(user.id, base + Duration::seconds(30))
            .await
            .unwrap();
        assert!(advanced);

        let ignored = repo
            .set_issued_at_cutoff(user.id, base - Duration::seconds(30))
            .await
            .unwrap();
        assert!(!ignored);

        let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.issued_at_cutoff, base + Duration::seconds(30));
    }

    #[tokio::test]
    async fn test_cutoff_for_unknown_user() {
        let repo = MockUserRepository::new();
        let advanced = repo
            .set_issued_at_cutoff(Uuid::new_v4(), Utc::now())
            .await
            .unwrap();
        assert!(!advanced);
    }
}
