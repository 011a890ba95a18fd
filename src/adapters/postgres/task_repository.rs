//! PostgreSQL implementation of TaskRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::foundation::{DomainError, TaskId, UserId};
use crate::domain::task::{
    completion_days, ActualDates, DependencyInsert, DependencyType, NewTask, ShortTask, Task,
    TaskDependency, TaskDetails, TaskStatus, TaskWithDependency,
};
use crate::ports::TaskRepository;

/// Advisory lock key guarding inserts into `task_depends`.
const DEPENDENCY_LOCK_KEY: i64 = 0x7461_736b_6465_7073;

const TASK_COLUMNS: &str = r#"
    "id", "responsible_user_id", "status", "title", "description", "deadline",
    "days_for_completion", "actual_start_date", "actual_finish_date",
    "actual_completion_days", "is_archived", "created_timestamp"
"#;

/// PostgreSQL implementation of TaskRepository.
#[derive(Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_task(&self, sql: &str, id: TaskId) -> Result<Option<Task>, DomainError> {
        let row = sqlx::query(sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch task", e))?;
        row.map(row_to_task).transpose()
    }

    async fn execute_affecting(
        &self,
        query: sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments>,
        action: &str,
    ) -> Result<bool, DomainError> {
        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| db_error(action, e))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: &NewTask) -> Result<Task, DomainError> {
        let sql = format!(
            r#"
            INSERT INTO "task" (
                "status", "title", "description", "deadline",
                "responsible_user_id", "days_for_completion"
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {TASK_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(task.status.as_str())
            .bind(task.title.as_deref())
            .bind(task.description.as_deref())
            .bind(task.deadline)
            .bind(task.responsible_user_id.as_i64())
            .bind(task.days_for_completion)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("insert task", e))?;
        row_to_task(row)
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Option<Task>, DomainError> {
        let sql = format!(r#"SELECT {TASK_COLUMNS} FROM "task" WHERE "id" = $1"#);
        self.fetch_task(&sql, id).await
    }

    async fn update_task_data(
        &self,
        id: TaskId,
        details: &TaskDetails,
    ) -> Result<Option<Task>, DomainError> {
        let sql = format!(
            r#"
            UPDATE "task"
            SET "title" = $2, "description" = $3, "deadline" = $4,
                "responsible_user_id" = $5, "days_for_completion" = $6
            WHERE "id" = $1
            RETURNING {TASK_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .bind(details.title.as_deref())
            .bind(details.description.as_deref())
            .bind(details.deadline)
            .bind(details.responsible_user_id.as_i64())
            .bind(details.days_for_completion)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("update task data", e))?;
        row.map(row_to_task).transpose()
    }

    async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        today: NaiveDate,
    ) -> Result<Option<Task>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("start transaction", e))?;

        let current = sqlx::query(
            r#"
            SELECT "actual_start_date", "actual_finish_date"
            FROM "task" WHERE "id" = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| db_error("lock task", e))?;
        let Some(current) = current else {
            return Ok(None);
        };
        let current = ActualDates::new(
            column(&current, "actual_start_date")?,
            column(&current, "actual_finish_date")?,
        );
        let dates = ActualDates::for_status(status, current, today);

        let sql = format!(
            r#"
            UPDATE "task"
            SET "status" = $2,
                "actual_start_date" = $3,
                "actual_finish_date" = $4,
                "actual_completion_days" = $5
            WHERE "id" = $1
            RETURNING {TASK_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .bind(status.as_str())
            .bind(dates.start)
            .bind(dates.finish)
            .bind(dates.completion_days())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| db_error("update task status", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("commit transaction", e))?;
        row_to_task(row).map(Some)
    }

    async fn update_task_start_finish_dates(
        &self,
        id: TaskId,
        start: Option<NaiveDate>,
        finish: Option<NaiveDate>,
    ) -> Result<bool, DomainError> {
        let query = sqlx::query(
            r#"
            UPDATE "task"
            SET "actual_start_date" = $2,
                "actual_finish_date" = $3,
                "actual_completion_days" = $4
            WHERE "id" = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(start)
        .bind(finish)
        .bind(completion_days(start, finish));
        self.execute_affecting(query, "update task dates").await
    }

    async fn update_task_archive_status(
        &self,
        id: TaskId,
        is_archived: bool,
    ) -> Result<bool, DomainError> {
        let query = sqlx::query(r#"UPDATE "task" SET "is_archived" = $2 WHERE "id" = $1"#)
            .bind(id.as_i64())
            .bind(is_archived);
        self.execute_affecting(query, "update task archive status")
            .await
    }

    async fn update_task_deadline(
        &self,
        id: TaskId,
        deadline: NaiveDate,
    ) -> Result<bool, DomainError> {
        let query = sqlx::query(r#"UPDATE "task" SET "deadline" = $2 WHERE "id" = $1"#)
            .bind(id.as_i64())
            .bind(deadline);
        self.execute_affecting(query, "update task deadline").await
    }

    async fn get_all_short_tasks(&self) -> Result<Vec<ShortTask>, DomainError> {
        let rows = sqlx::query(r#"SELECT "id", "title" FROM "task" ORDER BY "id""#)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("fetch short tasks", e))?;

        rows.into_iter()
            .map(|row| {
                Ok(ShortTask {
                    id: TaskId::new(column(&row, "id")?),
                    title: column(&row, "title")?,
                })
            })
            .collect()
    }

    async fn get_tasks_ordered_by_deadline(&self) -> Result<Vec<Task>, DomainError> {
        let sql = format!(
            r#"
            SELECT {TASK_COLUMNS} FROM "task"
            WHERE NOT "is_archived"
            ORDER BY "deadline", "id"
            "#
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("fetch tasks by deadline", e))?;
        rows.into_iter().map(row_to_task).collect()
    }

    async fn get_task_depends(&self, id: TaskId) -> Result<Vec<TaskDependency>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT "task_id", "depends_task_id", "created_timestamp"
            FROM "task_depends"
            WHERE "task_id" = $1
            ORDER BY "depends_task_id"
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch task prerequisites", e))?;
        rows.into_iter().map(row_to_dependency).collect()
    }

    async fn get_tasks_dependent_of(&self, id: TaskId) -> Result<Vec<TaskDependency>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT "task_id", "depends_task_id", "created_timestamp"
            FROM "task_depends"
            WHERE "depends_task_id" = $1
            ORDER BY "task_id"
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch dependent tasks", e))?;
        rows.into_iter().map(row_to_dependency).collect()
    }

    async fn get_all_dependency_edges(&self) -> Result<Vec<TaskDependency>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT "task_id", "depends_task_id", "created_timestamp"
            FROM "task_depends"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch dependency edges", e))?;
        rows.into_iter().map(row_to_dependency).collect()
    }

    async fn add_task_depends(
        &self,
        id: TaskId,
        depends_id: TaskId,
    ) -> Result<DependencyInsert, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("start transaction", e))?;

        // Serializes edge inserts so concurrent checks see each other's edges.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(DEPENDENCY_LOCK_KEY)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("lock task dependencies", e))?;

        let rows = sqlx::query(
            r#"SELECT "task_id", "depends_task_id", "created_timestamp" FROM "task_depends""#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| db_error("fetch dependency edges", e))?;
        let edges = rows
            .into_iter()
            .map(row_to_dependency)
            .collect::<Result<Vec<_>, _>>()?;

        let outcome = DependencyInsert::evaluate(&edges, id, depends_id);
        if outcome == DependencyInsert::Added {
            sqlx::query(
                r#"
                INSERT INTO "task_depends" ("task_id", "depends_task_id")
                VALUES ($1, $2)
                "#,
            )
            .bind(id.as_i64())
            .bind(depends_id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("insert task dependency", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("commit transaction", e))?;
        Ok(outcome)
    }

    async fn del_tasks_depends(&self, id: TaskId, depends_id: TaskId) -> Result<bool, DomainError> {
        let query = sqlx::query(
            r#"DELETE FROM "task_depends" WHERE "task_id" = $1 AND "depends_task_id" = $2"#,
        )
        .bind(id.as_i64())
        .bind(depends_id.as_i64());
        self.execute_affecting(query, "delete task dependency")
            .await
    }

    async fn get_all_task_dependencies(
        &self,
        id: TaskId,
    ) -> Result<Vec<TaskWithDependency>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT "task"."id", 'depends_of' AS "dependency_type",
                   "task"."title", "task"."deadline", "task"."responsible_user_id"
            FROM "task_depends" JOIN "task"
              ON "task_depends"."task_id" = "task"."id"
            WHERE "task_depends"."depends_task_id" = $1
            UNION
            SELECT "task"."id", 'dependent_for' AS "dependency_type",
                   "task"."title", "task"."deadline", "task"."responsible_user_id"
            FROM "task_depends" JOIN "task"
              ON "task_depends"."depends_task_id" = "task"."id"
            WHERE "task_depends"."task_id" = $1
            UNION
            SELECT "id", 'self' AS "dependency_type",
                   "title", "deadline", "responsible_user_id"
            FROM "task"
            WHERE "id" = $1
            ORDER BY "deadline", "id"
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch task dependencies", e))?;

        rows.into_iter()
            .map(|row| {
                let kind: String = column(&row, "dependency_type")?;
                Ok(TaskWithDependency {
                    id: TaskId::new(column(&row, "id")?),
                    dependency_type: str_to_dependency_type(&kind)?,
                    responsible_user_id: column::<Option<i64>>(&row, "responsible_user_id")?
                        .map(UserId::new),
                    title: column(&row, "title")?,
                    deadline: column(&row, "deadline")?,
                })
            })
            .collect()
    }

    async fn del_responsible_user_id(&self, user_id: UserId) -> Result<bool, DomainError> {
        let query = sqlx::query(
            r#"
            UPDATE "task"
            SET "responsible_user_id" = NULL
            WHERE "responsible_user_id" = $1
            "#,
        )
        .bind(user_id.as_i64());
        self.execute_affecting(query, "clear responsible user")
            .await
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn str_to_dependency_type(s: &str) -> Result<DependencyType, DomainError> {
    match s {
        "depends_of" => Ok(DependencyType::DependsOf),
        "dependent_for" => Ok(DependencyType::DependentFor),
        "self" => Ok(DependencyType::SelfTask),
        _ => Err(DomainError::database(format!(
            "Invalid dependency type: {}",
            s
        ))),
    }
}

fn row_to_task(row: PgRow) -> Result<Task, DomainError> {
    let status: String = column(&row, "status")?;
    let status = status
        .parse::<TaskStatus>()
        .map_err(|e| DomainError::database(format!("Invalid task status: {}", e)))?;

    Ok(Task {
        id: TaskId::new(column(&row, "id")?),
        responsible_user_id: column::<Option<i64>>(&row, "responsible_user_id")?.map(UserId::new),
        status,
        title: column(&row, "title")?,
        description: column(&row, "description")?,
        deadline: column(&row, "deadline")?,
        days_for_completion: column(&row, "days_for_completion")?,
        actual_start_date: column(&row, "actual_start_date")?,
        actual_finish_date: column(&row, "actual_finish_date")?,
        actual_completion_days: column(&row, "actual_completion_days")?,
        is_archived: column(&row, "is_archived")?,
        created_timestamp: column::<DateTime<Utc>>(&row, "created_timestamp")?,
    })
}

fn row_to_dependency(row: PgRow) -> Result<TaskDependency, DomainError> {
    Ok(TaskDependency {
        task_id: TaskId::new(column(&row, "task_id")?),
        depends_task_id: TaskId::new(column(&row, "depends_task_id")?),
        created_timestamp: column(&row, "created_timestamp")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_type_conversion_roundtrips() {
        for kind in [
            DependencyType::DependsOf,
            DependencyType::DependentFor,
            DependencyType::SelfTask,
        ] {
            assert_eq!(str_to_dependency_type(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn str_to_dependency_type_rejects_invalid() {
        assert!(str_to_dependency_type("sibling").is_err());
    }

    #[test]
    fn task_columns_match_entity_fields() {
        let columns: Vec<&str> = TASK_COLUMNS
            .split(',')
            .map(|c| c.trim().trim_matches('"'))
            .collect();
        assert_eq!(columns.len(), 12);
        assert_eq!(columns.first(), Some(&"id"));
        assert_eq!(columns.last(), Some(&"created_timestamp"));
    }
}
