//! User command and query handlers.

mod create_user;
mod delete_user;
mod get_user;
mod list_users;

pub use create_user::CreateUserHandler;
pub use delete_user::DeleteUserHandler;
pub use get_user::GetUserHandler;
pub use list_users::ListUsersHandler;
