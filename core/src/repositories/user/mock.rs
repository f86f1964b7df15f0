//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// In-memory user repository
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository pre-populated with users
    pub fn with_users(users: Vec<User>) -> Self {
        let map = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }

    fn sorted(users: impl Iterator<Item = User>) -> Vec<User> {
        let mut users: Vec<User> = users.collect();
        users.sort_by_key(|u| u.created_at);
        users
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.mobile == mobile))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // Mirror the unique indexes on email and mobile
        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyExists.into());
        }
        if users.values().any(|u| u.mobile == user.mobile) {
            return Err(AuthError::MobileAlreadyRegistered.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.set_password_hash(password_hash.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(Self::sorted(users.values().cloned()))
    }

    async fn search(&self, query: &str) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(Self::sorted(
            users.values().filter(|u| u.matches_query(query)).cloned(),
        ))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.len() as u64)
    }
}
