//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TaskRepository` - Tasks and dependency edges
//! - `UserRepository` - Users responsible for tasks

mod task_repository;
mod user_repository;

pub use task_repository::TaskRepository;
pub use user_repository::UserRepository;
