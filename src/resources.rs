// ABOUTME: Shared server resources injected into services and route handlers
// ABOUTME: Holds the persistence handle and configuration behind Arcs for cheap cloning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::database_plugins::factory::Database;
use crate::database_plugins::DatabaseProvider;
use fitness_coach_core::errors::AppResult;
use std::sync::Arc;

/// Centralized resource container for dependency injection
///
/// Tests build one around a memory store or a failing fake; the server builds
/// one from [`ServerConfig`].
#[derive(Clone)]
pub struct ServerResources {
    /// Persistence collaborator shared by the assessment and history services
    pub database: Arc<dyn DatabaseProvider>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wrap an existing database and configuration
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseProvider>, config: Arc<ServerConfig>) -> Self {
        Self { database, config }
    }

    /// Open the configured database and assemble resources
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let database = Database::from_config(&config.database).await?;
        Ok(Self::new(Arc::new(database), Arc::new(config)))
    }
}
