//! Dependencies between tasks.
//!
//! An edge `(task_id, depends_task_id)` means `task_id` cannot be finished
//! before `depends_task_id`; the latter is the prerequisite.

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TaskId, UserId};

/// A stored dependency edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDependency {
    pub task_id: TaskId,
    pub depends_task_id: TaskId,
    pub created_timestamp: DateTime<Utc>,
}

/// How a listed task relates to the task whose dependencies are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyType {
    /// The listed task depends on the subject.
    DependsOf,
    /// The subject depends on the listed task.
    DependentFor,
    /// The subject itself.
    #[serde(rename = "self")]
    SelfTask,
}

impl DependencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::DependsOf => "depends_of",
            DependencyType::DependentFor => "dependent_for",
            DependencyType::SelfTask => "self",
        }
    }
}

/// A task listed together with its relation to the subject task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskWithDependency {
    pub id: TaskId,
    pub dependency_type: DependencyType,
    pub responsible_user_id: Option<UserId>,
    pub title: Option<String>,
    pub deadline: NaiveDate,
}

/// Outcome of inserting a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyInsert {
    Added,
    AlreadyPresent,
    /// Nothing was stored: the edge would close a cycle.
    WouldCycle,
}

impl DependencyInsert {
    /// Decides what adding `task -> depends_on` to `edges` does.
    ///
    /// Repositories call this while holding whatever guards the edge set,
    /// so the check and the insert see the same edges.
    pub fn evaluate(edges: &[TaskDependency], task: TaskId, depends_on: TaskId) -> Self {
        let present = edges
            .iter()
            .any(|e| e.task_id == task && e.depends_task_id == depends_on);
        if present {
            DependencyInsert::AlreadyPresent
        } else if would_create_cycle(edges, task, depends_on) {
            DependencyInsert::WouldCycle
        } else {
            DependencyInsert::Added
        }
    }
}

/// Returns true when adding `task -> depends_on` would close a cycle.
///
/// A cycle exists if `depends_on` already reaches `task` through the
/// existing prerequisite edges.
pub fn would_create_cycle(edges: &[TaskDependency], task: TaskId, depends_on: TaskId) -> bool {
    if task == depends_on {
        return true;
    }

    let mut prerequisites: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
    for edge in edges {
        prerequisites
            .entry(edge.task_id)
            .or_default()
            .push(edge.depends_task_id);
    }

    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([depends_on]);
    while let Some(current) = queue.pop_front() {
        if current == task {
            return true;
        }
        if !seen.insert(current) {
            continue;
        }
        if let Some(next) = prerequisites.get(&current) {
            queue.extend(next.iter().copied());
        }
    }
    false
}
