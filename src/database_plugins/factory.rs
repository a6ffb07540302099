// ABOUTME: Database factory selecting the storage backend from a connection URL
// ABOUTME: Delegates every DatabaseProvider call to the SQLite or in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Database factory for creating database providers
//!
//! This module provides automatic database type detection and creation
//! based on connection strings.

use super::memory::MemoryDatabase;
use super::sqlite::SqliteDatabase;
use super::DatabaseProvider;
use crate::config::DatabaseUrl;
use async_trait::async_trait;
use fitness_coach_core::errors::{AppError, AppResult};
use fitness_coach_core::models::AssessmentRecord;
use tracing::{debug, info};

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// `sqlite:` URLs
    Sqlite,
    /// `memory://`
    Memory,
}

/// Database instance wrapper that delegates to the appropriate implementation
#[derive(Debug, Clone)]
pub enum Database {
    /// `SQLite` file or in-memory database
    Sqlite(SqliteDatabase),
    /// Process-local map
    Memory(MemoryDatabase),
}

impl Database {
    /// Get the database type enum
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::Sqlite(_) => DatabaseType::Sqlite,
            Self::Memory(_) => DatabaseType::Memory,
        }
    }

    /// Create a new database instance based on the connection string
    ///
    /// # Errors
    ///
    /// Returns an error if the URL format is unsupported, the connection fails,
    /// or migrations fail
    pub async fn new(database_url: &str) -> AppResult<Self> {
        debug!("Detecting database type from URL: {}", database_url);
        let db_type = detect_database_type(database_url)?;
        info!("Detected database type: {:?}", db_type);

        match db_type {
            DatabaseType::Sqlite => {
                info!("Initializing SQLite database");
                let db = SqliteDatabase::new(database_url).await?;
                info!("SQLite database initialized successfully");
                Ok(Self::Sqlite(db))
            }
            DatabaseType::Memory => {
                info!("Initializing in-memory database");
                Ok(Self::Memory(MemoryDatabase::new()))
            }
        }
    }

    /// Create a database from a parsed configuration value
    ///
    /// # Errors
    ///
    /// Same as [`Database::new`]
    pub async fn from_config(url: &DatabaseUrl) -> AppResult<Self> {
        Self::new(&url.to_connection_string()).await
    }
}

/// Automatically detect database type from connection string
///
/// # Errors
///
/// Returns an error if the URL is neither `sqlite:` nor `memory://`
pub fn detect_database_type(database_url: &str) -> AppResult<DatabaseType> {
    if database_url.starts_with("sqlite:") {
        Ok(DatabaseType::Sqlite)
    } else if database_url == "memory://" {
        Ok(DatabaseType::Memory)
    } else {
        Err(AppError::config(format!(
            "Unsupported database URL format: {database_url}. \
             Supported formats: sqlite:path/to/db.sqlite, sqlite::memory:, memory://"
        )))
    }
}

#[async_trait]
impl DatabaseProvider for Database {
    async fn migrate(&self) -> AppResult<()> {
        match self {
            Self::Sqlite(db) => db.migrate().await,
            Self::Memory(db) => db.migrate().await,
        }
    }

    async fn put_assessment(&self, record: &AssessmentRecord) -> AppResult<()> {
        match self {
            Self::Sqlite(db) => db.put_assessment(record).await,
            Self::Memory(db) => db.put_assessment(record).await,
        }
    }

    async fn query_assessments(
        &self,
        user_id: &str,
        limit: u32,
    ) -> AppResult<Vec<AssessmentRecord>> {
        match self {
            Self::Sqlite(db) => db.query_assessments(user_id, limit).await,
            Self::Memory(db) => db.query_assessments(user_id, limit).await,
        }
    }

    async fn health_check(&self) -> AppResult<()> {
        match self {
            Self::Sqlite(db) => db.health_check().await,
            Self::Memory(db) => db.health_check().await,
        }
    }

    fn backend_info(&self) -> &'static str {
        match self {
            Self::Sqlite(db) => db.backend_info(),
            Self::Memory(db) => db.backend_info(),
        }
    }
}
