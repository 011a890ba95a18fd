//! Request bodies for user endpoints.

use serde::Deserialize;

use crate::domain::user::NewUser;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
        }
    }
}
