//! In-memory user repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

#[derive(Debug, Default)]
struct State {
    users: BTreeMap<UserId, User>,
    last_id: i64,
}

/// In-memory storage for users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let user = User {
            id: UserId::new(state.last_id),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            created_timestamp: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.state.write().await.users.remove(&id).is_some())
    }
}
