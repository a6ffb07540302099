// ABOUTME: Main library entry point for the Fitness Coach assessment API
// ABOUTME: Wires configuration, persistence, services and the HTTP transport together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Coach API
//!
//! Answers free-text fitness questions with formula-based assessments
//! (VO2max, BMR/TDEE, BMI, heart-rate zones) and keeps a per-user history of
//! every question asked.
//!
//! ## Architecture
//!
//! - **fitness-coach-core**: errors, constants and domain models
//! - **fitness-coach-intelligence**: keyword classifier, calculators and narrative rendering
//! - **services**: assessment and history workflows over a `DatabaseProvider`
//! - **routes** / **middleware**: the axum transport with CORS and request tracing
//! - **database_plugins**: `SQLite` and in-memory storage backends
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitness_coach_api::config::ServerConfig;
//! use fitness_coach_api::resources::ServerResources;
//! use fitness_coach_api::server::FitnessCoachServer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::from_config(config).await?;
//!     FitnessCoachServer::new(Arc::new(resources)).run().await?;
//!     Ok(())
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Storage backends behind the `DatabaseProvider` trait
pub mod database_plugins;

/// Structured logging setup and domain log events
pub mod logging;

/// CORS and request tracing layers
pub mod middleware;

/// Dependency container shared by services and routes
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server lifecycle
pub mod server;

/// Assessment and history workflows
pub mod services;

pub use fitness_coach_core::{constants, errors, models};
pub use fitness_coach_intelligence as intelligence;
