// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven server configuration with typed database URLs and CORS origins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Fitness Coach API
//!
//! - **Environment**: server configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, DatabaseUrl, Environment, ServerConfig};
