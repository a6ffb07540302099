// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Fitness Coach platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identity used in logs
pub mod service_names {
    /// Server service name
    pub const FITNESS_COACH_SERVER: &str = "fitness-coach-server";
    /// CLI service name
    pub const FITNESS_COACH_CLI: &str = "fitness-coach-cli";
}

/// API routes
pub mod routes {
    /// Assessment endpoint (POST)
    pub const ASSESS: &str = "/assess";
    /// History endpoint (GET)
    pub const HISTORY: &str = "/history";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Persistence backend URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Allowed CORS origins (`*` or comma-separated)
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Default history page size
    pub const HISTORY_DEFAULT_LIMIT: &str = "HISTORY_DEFAULT_LIMIT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/fitness_coach.db";
    /// Wildcard origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Default limits
pub mod limits {
    /// Number of history entries returned when the caller does not ask for a size
    pub const DEFAULT_HISTORY_LIMIT: u32 = 15;
    /// Largest history page a caller may request
    pub const MAX_HISTORY_LIMIT: u32 = 100;
}

/// Biometric defaults applied when a user omits a profile field
pub mod profile_defaults {
    /// Age in years
    pub const AGE_YEARS: i32 = 30;
    /// Body weight in kilograms
    pub const WEIGHT_KG: f64 = 70.0;
    /// Height in centimeters
    pub const HEIGHT_CM: f64 = 175.0;
}

/// Database table names
pub mod tables {
    /// Append-only assessment log
    pub const ASSESSMENTS: &str = "fitness_user_assessments";
}
