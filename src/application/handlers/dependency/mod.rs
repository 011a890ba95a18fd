//! Dependency command and query handlers.

mod add_dependency;
mod list_dependencies;
mod remove_dependency;

pub use add_dependency::{AddDependencyCommand, AddDependencyHandler};
pub use list_dependencies::ListDependenciesHandler;
pub use remove_dependency::{RemoveDependencyCommand, RemoveDependencyHandler};
