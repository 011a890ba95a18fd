//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, User};

/// Repository port for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// All users ordered by id.
    async fn get_all(&self) -> Result<Vec<User>, DomainError>;

    /// Deletes a user; returns false when it did not exist.
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
