//! CreateUserHandler - registers a person who can own tasks.

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{NewUser, User, UserError};
use crate::ports::UserRepository;

pub struct CreateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: NewUser) -> Result<User, UserError> {
        let cmd = cmd.validated()?;
        let user = self.users.create(&cmd).await?;
        info!(user_id = %user.id, "user created");
        Ok(user)
    }
}
