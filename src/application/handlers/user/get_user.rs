//! GetUserHandler - Query handler for a single user.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

pub struct GetUserHandler {
    users: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, id: UserId) -> Result<User, UserError> {
        self.users
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}
