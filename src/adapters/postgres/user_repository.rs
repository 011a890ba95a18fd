//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO "users" ("name", "email")
            VALUES ($1, $2)
            RETURNING "id", "name", "email", "created_timestamp"
            "#,
        )
        .bind(&user.name)
        .bind(user.email.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("insert user", e))?;
        row_to_user(row)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT "id", "name", "email", "created_timestamp"
            FROM "users"
            WHERE "id" = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch user", e))?;
        row.map(row_to_user).transpose()
    }

    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT "id", "name", "email", "created_timestamp"
            FROM "users"
            ORDER BY "id"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch users", e))?;
        rows.into_iter().map(row_to_user).collect()
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let result = sqlx::query(r#"DELETE FROM "users" WHERE "id" = $1"#)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete user", e))?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_user(row: PgRow) -> Result<User, DomainError> {
    Ok(User {
        id: UserId::new(column(&row, "id")?),
        name: column(&row, "name")?,
        email: column(&row, "email")?,
        created_timestamp: column(&row, "created_timestamp")?,
    })
}
