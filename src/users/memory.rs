use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::error::{UserRepoError, UserRepoResult};
use super::repo::UserRepository;
use super::repo_types::{now_micros, User};

/// In-memory stand-in for `PgUserRepository` with the same semantics:
/// soft delete, live-only reads and updates, zero-row writes are no-ops.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id, u)).collect()),
        }
    }

    /// Number of stored rows, soft-deleted ones included.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: Uuid) -> UserRepoResult<User> {
        self.users
            .read()
            .await
            .get(&id)
            .filter(|u| !u.is_deleted())
            .cloned()
            .ok_or(UserRepoError::NotFound(id))
    }

    async fn get_by_id_with_deleted(&self, id: Uuid) -> UserRepoResult<User> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(UserRepoError::NotFound(id))
    }

    async fn create(&self, full_name: &str, email: &str) -> UserRepoResult<User> {
        let user = User {
            id: Uuid::new_v4(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            created_at: now_micros(),
            updated_at: None,
            deleted_at: None,
        };
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_email(&self, id: Uuid, new_email: &str) -> UserRepoResult<u64> {
        let mut users = self.users.write().await;
        match users.get_mut(&id).filter(|u| !u.is_deleted()) {
            Some(user) => {
                user.email = new_email.to_string();
                user.updated_at = Some(now_micros());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> UserRepoResult<()> {
        if let Some(user) = self.users.write().await.get_mut(&id) {
            if !user.is_deleted() {
                user.deleted_at = Some(now_micros());
            }
        }
        Ok(())
    }

    async fn hard_delete(&self, id: Uuid) -> UserRepoResult<u64> {
        Ok(self.users.write().await.remove(&id).map_or(0, |_| 1))
    }
}
