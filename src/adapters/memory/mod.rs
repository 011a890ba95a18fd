//! In-memory adapters - Used by tests and by the `memory` database backend.

mod task_repository;
mod user_repository;

pub use task_repository::InMemoryTaskRepository;
pub use user_repository::InMemoryUserRepository;
