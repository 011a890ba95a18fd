//! Start and finish dates shown on the timeline.

use chrono::NaiveDate;

use super::warnings::days_before;
use crate::domain::task::Task;

/// Timeline span of a task: actual dates when known, planned ones otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub start: NaiveDate,
    pub finish: NaiveDate,
}

impl Schedule {
    /// Planned start is the latest day that still fits the estimate before
    /// the deadline, counting both ends.
    pub fn for_task(task: &Task) -> Self {
        let start = task.actual_start_date.unwrap_or_else(|| {
            days_before(task.deadline, i64::from(task.days_for_completion) - 1)
        });
        let finish = task
            .actual_finish_date
            .unwrap_or_else(|| task.deadline.max(start));
        Self { start, finish }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TaskId;
    use crate::domain::task::TaskStatus;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(deadline: NaiveDate, days: i32) -> Task {
        Task {
            id: TaskId::new(1),
            responsible_user_id: None,
            status: TaskStatus::ToDo,
            title: None,
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

    #[test]
    fn planned_schedule_ends_on_deadline() {
        let schedule = Schedule::for_task(&task(date(2024, 6, 30), 5));
        assert_eq!(schedule.start, date(2024, 6, 26));
        assert_eq!(schedule.finish, date(2024, 6, 30));
    }

    #[test]
    fn single_day_task_starts_on_deadline() {
        let schedule = Schedule::for_task(&task(date(2024, 6, 30), 1));
        assert_eq!(schedule.start, date(2024, 6, 30));
        assert_eq!(schedule.finish, date(2024, 6, 30));
    }

    #[test]
    fn actual_dates_take_precedence() {
        let mut t = task(date(2024, 6, 30), 5);
        t.actual_start_date = Some(date(2024, 6, 10));
        t.actual_finish_date = Some(date(2024, 6, 12));
        let schedule = Schedule::for_task(&t);
        assert_eq!(schedule.start, date(2024, 6, 10));
        assert_eq!(schedule.finish, date(2024, 6, 12));
    }

    #[test]
    fn started_after_deadline_finishes_no_earlier_than_start() {
        let mut t = task(date(2024, 6, 30), 5);
        t.actual_start_date = Some(date(2024, 7, 3));
        let schedule = Schedule::for_task(&t);
        assert_eq!(schedule.finish, date(2024, 7, 3));
    }
}
