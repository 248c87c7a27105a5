//! PostgreSQL-backed store plus startup DDL for the `students` table.

use super::StudentStore;
use crate::error::{AppError, ConfigError};
use crate::model::{Student, StudentChanges};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, Connection, PgPool};
use std::str::FromStr;

pub const STUDENTS_TABLE: &str = "students";

/// Queries go straight to the pool; each statement checks out a connection and
/// returns it when the future completes or is dropped.
#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn create(&self, student: &Student) -> Result<(), AppError> {
        let sql = format!(
            "INSERT INTO {} (student_id, name, score, address) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (student_id) DO NOTHING",
            STUDENTS_TABLE
        );
        tracing::debug!(sql = %sql, student_id = student.student_id, "query");
        let done = sqlx::query(&sql)
            .bind(student.student_id)
            .bind(&student.name)
            .bind(student.score)
            .bind(&student.address)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::Conflict(student.student_id));
        }
        Ok(())
    }

    async fn update(&self, student_id: i32, changes: &StudentChanges) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {} SET name = $2, score = $3, address = $4 WHERE student_id = $1",
            STUDENTS_TABLE
        );
        tracing::debug!(sql = %sql, student_id, "query");
        let done = sqlx::query(&sql)
            .bind(student_id)
            .bind(&changes.name)
            .bind(changes.score)
            .bind(&changes.address)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound(student_id));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT student_id, name, score, address FROM {}", STUDENTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Student>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, student_id: i32) -> Result<Option<Student>, AppError> {
        let sql = format!(
            "SELECT student_id, name, score, address FROM {} WHERE student_id = $1",
            STUDENTS_TABLE
        );
        tracing::debug!(sql = %sql, student_id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let sql = format!("DELETE FROM {}", STUDENTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let done = sqlx::query(&sql).execute(&self.pool).await?;
        match done.rows_affected() {
            0 => Err(AppError::EmptyStore),
            n => Ok(n),
        }
    }

    async fn delete(&self, student_id: i32) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE student_id = $1", STUDENTS_TABLE);
        tracing::debug!(sql = %sql, student_id, "query");
        let done = sqlx::query(&sql).bind(student_id).execute(&self.pool).await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound(student_id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the `students` table if it is absent. Existing tables are left as they are.
pub async fn ensure_students_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            student_id INTEGER PRIMARY KEY,
            name VARCHAR NOT NULL,
            score DOUBLE PRECISION NOT NULL,
            address TEXT
        )
        "#,
        STUDENTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = STUDENTS_TABLE, "table ready");
    Ok(())
}

/// Make sure the database named in `database_url` exists. The target is tried
/// first; only when the server reports it missing (SQLSTATE 3D000) do we go
/// through the `postgres` maintenance database to create it.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let opts = connect_options(database_url)?;
    let Some(db_name) = opts.get_database().map(str::to_owned) else {
        return Ok(());
    };
    if db_name == "postgres" {
        return Ok(());
    }
    match opts.connect().await {
        Ok(conn) => {
            conn.close().await?;
            return Ok(());
        }
        Err(e) if has_sqlstate(&e, MISSING_DATABASE) => {
            tracing::info!(database = %db_name, "database missing, creating it");
        }
        Err(e) => return Err(e.into()),
    }
    let mut admin = opts.clone().database("postgres").connect().await.map_err(|e| {
        tracing::warn!(error = %e, "cannot reach the postgres maintenance database");
        e
    })?;
    match sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
        .execute(&mut admin)
        .await
    {
        Ok(_) => tracing::info!(database = %db_name, "created database"),
        // Another instance won the race.
        Err(e) if has_sqlstate(&e, DUPLICATE_DATABASE) => {}
        Err(e) => return Err(e.into()),
    }
    admin.close().await?;
    Ok(())
}

const MISSING_DATABASE: &str = "3D000";
const DUPLICATE_DATABASE: &str = "42P04";

fn connect_options(database_url: &str) -> Result<PgConnectOptions, ConfigError> {
    PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::DatabaseUrl(e.to_string()))
}

fn has_sqlstate(err: &sqlx::Error, code: &str) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(code))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
