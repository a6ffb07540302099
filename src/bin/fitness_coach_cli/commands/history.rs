// ABOUTME: History command for fitness-coach-cli
// ABOUTME: Reads a user's stored assessments from the configured database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitness_coach_api::{config::ServerConfig, resources::ServerResources, services::HistoryService};

use crate::helpers::display::display_history;

/// Print a user's history, newest first
pub async fn run(config: ServerConfig, user_id: &str, limit: Option<u32>) -> Result<()> {
    let resources = ServerResources::from_config(config).await?;
    let service = HistoryService::new(resources.database.clone(), resources.config.clone());
    let history = service.history(Some(user_id), limit).await?;
    display_history(&history);
    Ok(())
}
