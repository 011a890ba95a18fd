//! Task entity and the value types used to create and edit it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::TaskStatus;
use crate::domain::foundation::{TaskId, UserId, ValidationError};

/// Longest accepted task title, in characters.
pub const MAX_TITLE_LEN: usize = 255;

/// Longest accepted task description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

/// Upper bound for the completion estimate (ten years).
pub const MAX_DAYS_FOR_COMPLETION: i32 = 3650;

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub responsible_user_id: Option<UserId>,
    pub status: TaskStatus,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: NaiveDate,
    pub days_for_completion: i32,
    pub actual_start_date: Option<NaiveDate>,
    pub actual_finish_date: Option<NaiveDate>,
    pub actual_completion_days: Option<i32>,
    pub is_archived: bool,
    pub created_timestamp: DateTime<Utc>,
}

impl Task {
    /// Current actual dates of the task.
    pub fn actual_dates(&self) -> ActualDates {
        ActualDates {
            start: self.actual_start_date,
            finish: self.actual_finish_date,
        }
    }
}

/// Minimal projection used for pickers and lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortTask {
    pub id: TaskId,
    pub title: Option<String>,
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub status: TaskStatus,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: NaiveDate,
    pub responsible_user_id: UserId,
    pub days_for_completion: i32,
}

impl NewTask {
    /// Normalizes and validates the input.
    ///
    /// Titles are trimmed and a blank title becomes `None`.
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: normalize_title(self.title)?,
            description: validate_description(self.description)?,
            days_for_completion: validate_days_for_completion(self.days_for_completion)?,
            ..self
        })
    }
}

/// The user-editable part of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: NaiveDate,
    pub responsible_user_id: UserId,
    pub days_for_completion: i32,
}

impl TaskDetails {
    /// Normalizes and validates the input with the same rules as [`NewTask`].
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: normalize_title(self.title)?,
            description: validate_description(self.description)?,
            days_for_completion: validate_days_for_completion(self.days_for_completion)?,
            ..self
        })
    }
}

/// Actual start and finish dates of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActualDates {
    pub start: Option<NaiveDate>,
    pub finish: Option<NaiveDate>,
}

impl ActualDates {
    pub fn new(start: Option<NaiveDate>, finish: Option<NaiveDate>) -> Self {
        Self { start, finish }
    }

    /// Dates implied by moving a task into `status` on `today`.
    ///
    /// A recorded start later than `today` also becomes the finish date, so
    /// the pair never runs backwards.
    pub fn for_status(status: TaskStatus, current: ActualDates, today: NaiveDate) -> Self {
        match status {
            TaskStatus::ToDo => Self::default(),
            TaskStatus::InProgress => Self {
                start: Some(current.start.unwrap_or(today)),
                finish: None,
            },
            TaskStatus::Done => {
                let start = current.start.unwrap_or(today);
                Self {
                    start: Some(start),
                    finish: Some(today.max(start)),
                }
            }
        }
    }

    /// Inclusive number of days between start and finish.
    pub fn completion_days(&self) -> Option<i32> {
        completion_days(self.start, self.finish)
    }

    /// Rejects a finish date earlier than the start date.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(start), Some(finish)) = (self.start, self.finish) {
            if finish < start {
                return Err(ValidationError::invalid_format(
                    "actual_finish_date",
                    "finish date is before start date",
                ));
            }
        }
        Ok(())
    }
}

/// Inclusive day count, `None` unless both dates are known.
pub fn completion_days(start: Option<NaiveDate>, finish: Option<NaiveDate>) -> Option<i32> {
    match (start, finish) {
        (Some(start), Some(finish)) => Some((finish - start).num_days() as i32 + 1),
        _ => None,
    }
}

fn normalize_title(title: Option<String>) -> Result<Option<String>, ValidationError> {
    let Some(title) = title else {
        return Ok(None);
    };
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let len = trimmed.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(ValidationError::out_of_range(
            "title",
            1,
            MAX_TITLE_LEN as i64,
            len as i64,
        ));
    }
    Ok(Some(trimmed.to_string()))
}

fn validate_description(description: Option<String>) -> Result<Option<String>, ValidationError> {
    if let Some(text) = &description {
        let len = text.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::out_of_range(
                "description",
                0,
                MAX_DESCRIPTION_LEN as i64,
                len as i64,
            ));
        }
    }
    Ok(description)
}

fn validate_days_for_completion(days: i32) -> Result<i32, ValidationError> {
    if !(1..=MAX_DAYS_FOR_COMPLETION).contains(&days) {
        return Err(ValidationError::out_of_range(
            "days_for_completion",
            1,
            MAX_DAYS_FOR_COMPLETION as i64,
            days as i64,
        ));
    }
    Ok(days)
}
