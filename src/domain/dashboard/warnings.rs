//! Deadline risk warnings.
//!
//! A task gets a *soft* warning when it enters the reserve window in front
//! of the last safe day, and a *hard* warning once the last safe day has
//! been reached. The reserve window is the remaining work multiplied by the
//! time reserve coefficient.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::schedule::Schedule;
use crate::domain::foundation::TaskId;
use crate::domain::task::{Task, TaskStatus};

/// Kind of risk attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// Work should start soon.
    StartSoft,
    /// Work must start now to hit the deadline.
    StartHard,
    /// Work in progress is close to running out of time.
    FinishSoft,
    /// Work in progress cannot finish by the deadline at the current pace.
    FinishHard,
    /// The deadline has passed.
    LateDeadline,
    /// A prerequisite is scheduled to finish after this task starts.
    Cross,
}

/// A warning attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "type")]
    pub warning_type: WarningType,
    pub task_id: TaskId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_task_id: Option<TaskId>,
}

impl Warning {
    pub fn new(warning_type: WarningType, task_id: TaskId) -> Self {
        Self {
            warning_type,
            task_id,
            related_task_id: None,
        }
    }

    pub fn cross(task_id: TaskId, prerequisite: TaskId) -> Self {
        Self {
            warning_type: WarningType::Cross,
            task_id,
            related_task_id: Some(prerequisite),
        }
    }
}

/// Deadline warnings for a single task as of `today`.
pub fn warnings_for(task: &Task, today: NaiveDate, time_reserve_coef: f64) -> Vec<Warning> {
    let mut warnings = Vec::new();

    match task.status {
        TaskStatus::ToDo => {
            let days = i64::from(task.days_for_completion);
            let soft_from = days_before(task.deadline, reserve_days(days, time_reserve_coef));
            if today >= days_before(task.deadline, days) {
                warnings.push(Warning::new(WarningType::StartHard, task.id));
            } else if today >= soft_from {
                warnings.push(Warning::new(WarningType::StartSoft, task.id));
            }
        }
        TaskStatus::InProgress => {
            let days_in_work = task
                .actual_start_date
                .map(|start| (today - start).num_days())
                .unwrap_or(0);
            let remaining = (i64::from(task.days_for_completion) - days_in_work).max(0);

            let soft_from = days_before(task.deadline, reserve_days(remaining, time_reserve_coef));
            if today >= days_before(task.deadline, remaining) {
                warnings.push(Warning::new(WarningType::FinishHard, task.id));
            } else if today >= soft_from {
                warnings.push(Warning::new(WarningType::FinishSoft, task.id));
            }
        }
        TaskStatus::Done => {}
    }

    if today > task.deadline {
        warnings.push(Warning::new(WarningType::LateDeadline, task.id));
    }

    warnings
}

/// Cross warnings for `task` against its prerequisites.
///
/// Archived prerequisites are ignored.
pub fn cross_warnings<'a>(
    task: &Task,
    prerequisites: impl IntoIterator<Item = &'a Task>,
) -> Vec<Warning> {
    let start = Schedule::for_task(task).start;
    prerequisites
        .into_iter()
        .filter(|prerequisite| !prerequisite.is_archived)
        .filter(|prerequisite| Schedule::for_task(prerequisite).finish >= start)
        .map(|prerequisite| Warning::cross(task.id, prerequisite.id))
        .collect()
}

fn reserve_days(days: i64, time_reserve_coef: f64) -> i64 {
    (days as f64 * time_reserve_coef).floor() as i64
}

pub(crate) fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_sub_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use chrono::Utc;
    use proptest::prelude::*;

    const COEF: f64 = 1.5;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(status: TaskStatus, deadline: NaiveDate, days: i32) -> Task {
        Task {
            id: TaskId::new(1),
            responsible_user_id: Some(UserId::new(1)),
            status,
            title: Some("Task".to_string()),
            description: None,
            deadline,
            days_for_completion: days,
            actual_start_date: None,
            actual_finish_date: None,
            actual_completion_days: None,
            is_archived: false,
            created_timestamp: Utc::now(),
        }
    }

    fn types(warnings: &[Warning]) -> Vec<WarningType> {
        warnings.iter().map(|w| w.warning_type).collect()
    }

    #[test]
    fn to_do_far_from_deadline_has_no_warning() {
        let t = task(TaskStatus::ToDo, date(2024, 6, 30), 4);
        assert!(warnings_for(&t, date(2024, 6, 1), COEF).is_empty());
    }

    #[test]
    fn to_do_inside_reserve_window_is_soft() {
        // hard threshold: 06-26, soft threshold: 06-30 - 6 = 06-24
        let t = task(TaskStatus::ToDo, date(2024, 6, 30), 4);
        assert_eq!(
            types(&warnings_for(&t, date(2024, 6, 24), COEF)),
            vec![WarningType::StartSoft]
        );
        assert_eq!(
            types(&warnings_for(&t, date(2024, 6, 25), COEF)),
            vec![WarningType::StartSoft]
        );
    }

    #[test]
    fn to_do_at_last_safe_day_is_hard() {
        let t = task(TaskStatus::ToDo, date(2024, 6, 30), 4);
        assert_eq!(
            types(&warnings_for(&t, date(2024, 6, 26), COEF)),
            vec![WarningType::StartHard]
        );
    }

    #[test]
    fn reserve_window_rounds_down() {
        // 3 * 1.5 = 4.5 -> 4 days; soft threshold 06-26
        let t = task(TaskStatus::ToDo, date(2024, 6, 30), 3);
        assert!(warnings_for(&t, date(2024, 6, 25), COEF).is_empty());
        assert_eq!(
            types(&warnings_for(&t, date(2024, 6, 26), COEF)),
            vec![WarningType::StartSoft]
        );
    }

    #[test]
    fn overdue_to_do_is_hard_and_late() {
        let t = task(TaskStatus::ToDo, date(2024, 6, 30), 4);
        assert_eq!(
            types(&warnings_for(&t, date(2024, 7, 1), COEF)),
            vec![WarningType::StartHard, WarningType::LateDeadline]
        );
    }

    #[test]
    fn in_progress_uses_remaining_days() {
        let mut t = task(TaskStatus::InProgress, date(2024, 6, 30), 10);
        t.actual_start_date = Some(date(2024, 6, 16));
        // 4 days in work on 06-20, 6 remaining: hard at 06-24, soft at 06-21
        assert!(warnings_for(&t, date(2024, 6, 20), COEF).is_empty());

        // 5 days in work, 5 remaining: hard at 06-25, soft at 06-23
        assert!(warnings_for(&t, date(2024, 6, 21), COEF).is_empty());

        // 7 days in work, 3 remaining: hard at 06-27, soft at 06-26
        assert!(warnings_for(&t, date(2024, 6, 23), COEF).is_empty());

        // 10 days in work, 0 remaining: hard from the deadline
        assert_eq!(
            types(&warnings_for(&t, date(2024, 6, 26), COEF)),
            Vec::<WarningType>::new()
        );
        assert_eq!(
            types(&warnings_for(&t, date(2024, 6, 30), COEF)),
            vec![WarningType::FinishHard]
        );
    }

    #[test]
    fn in_progress_started_late_is_hard() {
        let mut t = task(TaskStatus::InProgress, date(2024, 6, 30), 10);
        t.actual_start_date = Some(date(2024, 6, 25));
        // 1 day in work, 9 remaining, deadline - 9 = 06-21 <= 06-26
        assert_eq!(
            types(&warnings_for(&t, date(2024, 6, 26), COEF)),
            vec![WarningType::FinishHard]
        );
    }

    #[test]
    fn in_progress_soft_window() {
        let mut t = task(TaskStatus::InProgress, date(2024, 6, 30), 4);
        t.actual_start_date = Some(date(2024, 6, 22));
        // 1 day in work, 3 remaining: hard at 06-27, soft at 06-30 - 4 = 06-26
        assert_eq!(
            types(&warnings_for(&t, date(2024, 6, 23), COEF)),
            Vec::<WarningType>::new()
        );
        let mut t = task(TaskStatus::InProgress, date(2024, 6, 30), 4);
        t.actual_start_date = Some(date(2024, 6, 25));
        // 1 day in work, 3 remaining on 06-26
        assert_eq!(
            types(&warnings_for(&t, date(2024, 6, 26), COEF)),
            vec![WarningType::FinishSoft]
        );
    }

    #[test]
    fn in_progress_without_start_counts_full_estimate() {
        let t = task(TaskStatus::InProgress, date(2024, 6, 30), 4);
        assert_eq!(
            types(&warnings_for(&t, date(2024, 6, 26), COEF)),
            vec![WarningType::FinishHard]
        );
    }

    #[test]
    fn done_only_reports_late_deadline() {
        let t = task(TaskStatus::Done, date(2024, 6, 30), 4);
        assert!(warnings_for(&t, date(2024, 6, 29), COEF).is_empty());
        assert_eq!(
            types(&warnings_for(&t, date(2024, 7, 2), COEF)),
            vec![WarningType::LateDeadline]
        );
    }

    #[test]
    fn warning_serializes_type_field() {
        let warning = Warning::new(WarningType::StartHard, TaskId::new(3));
        let json = serde_json::to_value(warning).unwrap();
        assert_eq!(json, serde_json::json!({"type": "start_hard", "task_id": 3}));

        let json = serde_json::to_value(Warning::cross(TaskId::new(3), TaskId::new(4))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "cross", "task_id": 3, "related_task_id": 4})
        );
    }

    #[test]
    fn cross_warning_when_prerequisite_overlaps() {
        let dependent = task(TaskStatus::ToDo, date(2024, 6, 30), 5); // starts 06-26
        let mut prerequisite = task(TaskStatus::ToDo, date(2024, 6, 27), 2);
        prerequisite.id = TaskId::new(2);

        let warnings = cross_warnings(&dependent, [&prerequisite]);
        assert_eq!(warnings, vec![Warning::cross(TaskId::new(1), TaskId::new(2))]);
    }

    #[test]
    fn no_cross_warning_when_prerequisite_finishes_first() {
        let dependent = task(TaskStatus::ToDo, date(2024, 6, 30), 5);
        let mut prerequisite = task(TaskStatus::ToDo, date(2024, 6, 25), 2);
        prerequisite.id = TaskId::new(2);

        assert!(cross_warnings(&dependent, [&prerequisite]).is_empty());
    }

    #[test]
    fn archived_prerequisite_is_ignored() {
        let dependent = task(TaskStatus::ToDo, date(2024, 6, 30), 5);
        let mut prerequisite = task(TaskStatus::ToDo, date(2024, 6, 29), 2);
        prerequisite.id = TaskId::new(2);
        prerequisite.is_archived = true;

        assert!(cross_warnings(&dependent, [&prerequisite]).is_empty());
    }

    fn status_strategy() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            Just(TaskStatus::ToDo),
            Just(TaskStatus::InProgress),
            Just(TaskStatus::Done),
        ]
    }

    proptest! {
        #[test]
        fn late_deadline_iff_today_after_deadline(
            status in status_strategy(),
            days in 1i32..60,
            offset in -90i64..90,
            coef in 1.0f64..3.0,
        ) {
            let deadline = date(2024, 6, 30);
            let today = deadline + Duration::days(offset);
            let warnings = warnings_for(&task(status, deadline, days), today, coef);
            let late = warnings.iter().any(|w| w.warning_type == WarningType::LateDeadline);
            prop_assert_eq!(late, today > deadline);
        }

        #[test]
        fn at_most_one_start_or_finish_warning(
            status in status_strategy(),
            days in 1i32..60,
            offset in -90i64..90,
            coef in 1.0f64..3.0,
        ) {
            let deadline = date(2024, 6, 30);
            let today = deadline + Duration::days(offset);
            let warnings = warnings_for(&task(status, deadline, days), today, coef);
            let risk = warnings
                .iter()
                .filter(|w| w.warning_type != WarningType::LateDeadline)
                .count();
            prop_assert!(risk <= 1);
            if status == TaskStatus::Done {
                prop_assert_eq!(risk, 0);
            }
        }

        #[test]
        fn start_hard_persists_as_time_passes(
            days in 1i32..60,
            offset in -90i64..90,
            coef in 1.0f64..3.0,
        ) {
            let deadline = date(2024, 6, 30);
            let today = deadline + Duration::days(offset);
            let t = task(TaskStatus::ToDo, deadline, days);
            let hard = |day: NaiveDate| {
                warnings_for(&t, day, coef)
                    .iter()
                    .any(|w| w.warning_type == WarningType::StartHard)
            };
            if hard(today) {
                prop_assert!(hard(today + Duration::days(1)));
            }
        }
    }
}
