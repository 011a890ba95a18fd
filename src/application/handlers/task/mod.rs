//! Task command and query handlers.

mod archive_task;
mod change_deadline;
mod change_status;
mod create_task;
mod get_task;
mod list_tasks;
mod set_task_dates;
mod update_task;

pub use archive_task::{ArchiveTaskCommand, ArchiveTaskHandler};
pub use change_deadline::{ChangeTaskDeadlineCommand, ChangeTaskDeadlineHandler};
pub use change_status::{ChangeTaskStatusCommand, ChangeTaskStatusHandler};
pub use create_task::CreateTaskHandler;
pub use get_task::GetTaskHandler;
pub use list_tasks::ListTasksHandler;
pub use set_task_dates::{SetTaskDatesCommand, SetTaskDatesHandler};
pub use update_task::{UpdateTaskCommand, UpdateTaskHandler};
