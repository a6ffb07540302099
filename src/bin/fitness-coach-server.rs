// ABOUTME: HTTP server binary for the Fitness Coach assessment API
// ABOUTME: Loads configuration from the environment, opens the database and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitness Coach API Server Binary
//!
//! Starts the HTTP API answering fitness questions and serving per-user history.

use anyhow::{Context, Result};
use clap::Parser;
use fitness_coach_api::{
    config::{DatabaseUrl, ServerConfig},
    logging,
    resources::ServerResources,
    server::FitnessCoachServer,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitness-coach-server")]
#[command(about = "Fitness Coach API - formula-based fitness assessments over HTTP")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (sqlite:path, sqlite::memory: or memory://)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database =
            DatabaseUrl::parse_url(&database_url).context("Invalid --database-url value")?;
    }

    logging::init_from_env()?;

    info!("Starting Fitness Coach API");
    info!("{}", config.summary());

    let resources = ServerResources::from_config(config)
        .await
        .context("Failed to initialize database")?;
    info!(
        "Database initialized successfully: {}",
        resources.database.backend_info()
    );

    let server = FitnessCoachServer::new(Arc::new(resources));
    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
