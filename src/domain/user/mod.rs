//! User module - people responsible for tasks.

mod errors;
#[allow(clippy::module_inception)]
mod user;

pub use errors::UserError;
pub use user::{NewUser, User, MAX_NAME_LEN};
