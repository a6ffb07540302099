// ABOUTME: SQLite assessment store using sqlx with an append-only table and a per-user index
// ABOUTME: Supports file databases (created on first use) and sqlite::memory: for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DatabaseProvider;
use crate::logging::AppLogger;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_coach_core::constants::tables;
use fitness_coach_core::errors::{AppError, AppResult};
use fitness_coach_core::models::{format_timestamp, AssessmentRecord};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

/// `SQLite` database implementation
#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    pool: Pool<Sqlite>,
}

impl SqliteDatabase {
    /// Open (creating if needed) the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the file cannot be opened, or
    /// the schema cannot be created
    pub async fn new(database_url: &str) -> AppResult<Self> {
        ensure_parent_dir(database_url)?;
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to :memory: is a separate database, so keep exactly one alive
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    fn row_to_record(row: &SqliteRow) -> AppResult<AssessmentRecord> {
        let timestamp: String = row.try_get("timestamp")?;
        let assessment_type: String = row.try_get("assessment_type")?;

        Ok(AssessmentRecord {
            user_id: row.try_get("user_id")?,
            timestamp: DateTime::parse_from_rfc3339(&timestamp)
                .map_err(|e| {
                    AppError::database(format!("Invalid stored timestamp '{timestamp}'"))
                        .with_source(e)
                })?
                .with_timezone(&Utc),
            question: row.try_get("question")?,
            assessment_type: assessment_type.parse()?,
            user_data: row.try_get("user_data")?,
            ai_response: row.try_get("ai_response")?,
        })
    }
}

/// Create the directory holding a file database so `create_if_missing` can succeed
fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
    if database_url.contains(":memory:") {
        return Ok(());
    }
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}",
                    parent.display()
                ))
                .with_source(e)
            })?;
        }
    }
    Ok(())
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(&format!(
            r"
            CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                question TEXT NOT NULL,
                assessment_type TEXT NOT NULL,
                user_data TEXT NOT NULL DEFAULT '',
                ai_response TEXT NOT NULL
            )
            ",
            table = tables::ASSESSMENTS
        ))
        .execute(&self.pool)
        .await?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_user_timestamp ON {table}(user_id, timestamp)",
            table = tables::ASSESSMENTS
        ))
        .execute(&self.pool)
        .await?;

        debug!(table = tables::ASSESSMENTS, "SQLite schema ready");
        Ok(())
    }

    async fn put_assessment(&self, record: &AssessmentRecord) -> AppResult<()> {
        let started = Instant::now();
        let result = sqlx::query(&format!(
            r"
            INSERT INTO {table} (user_id, timestamp, question, assessment_type, user_data, ai_response)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
            table = tables::ASSESSMENTS
        ))
        .bind(&record.user_id)
        .bind(format_timestamp(&record.timestamp))
        .bind(&record.question)
        .bind(record.assessment_type.as_str())
        .bind(&record.user_data)
        .bind(&record.ai_response)
        .execute(&self.pool)
        .await;

        AppLogger::log_database_operation(
            "insert",
            tables::ASSESSMENTS,
            result.is_ok(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        result?;
        Ok(())
    }

    async fn query_assessments(
        &self,
        user_id: &str,
        limit: u32,
    ) -> AppResult<Vec<AssessmentRecord>> {
        let rows = sqlx::query(&format!(
            r"
            SELECT user_id, timestamp, question, assessment_type, user_data, ai_response
            FROM {table}
            WHERE user_id = $1
            ORDER BY timestamp DESC, id DESC
            LIMIT $2
            ",
            table = tables::ASSESSMENTS
        ))
        .bind(user_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_record).collect()
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend_info(&self) -> &'static str {
        "SQLite"
    }
}
