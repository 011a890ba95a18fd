use std::collections::{BTreeSet, HashMap};

use futures::future::try_join_all;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::task::Task;
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Looks up each distinct responsible user once.
///
/// Users deleted since the task was read are left out.
pub(super) async fn load_responsibles(
    users: &dyn UserRepository,
    tasks: &[Task],
) -> Result<HashMap<UserId, User>, DomainError> {
    let ids: BTreeSet<UserId> = tasks
        .iter()
        .filter_map(|task| task.responsible_user_id)
        .collect();

    let found = try_join_all(ids.into_iter().map(|id| users.get_by_id(id))).await?;
    Ok(found
        .into_iter()
        .flatten()
        .map(|user| (user.id, user))
        .collect())
}
