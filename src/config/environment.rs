// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses listen address, database URL, CORS origins and history limits from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_config, limits, ports};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Whether this is a production deployment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database (file path or `:memory:`)
    Sqlite {
        /// Connection string passed to the driver, e.g. `sqlite:./data/fitness_coach.db`
        connection_string: String,
    },
    /// Process-local in-memory store
    Memory,
}

impl DatabaseUrl {
    /// Parse from a string
    ///
    /// `memory://` selects the in-process store. `sqlite:` URLs are passed to the
    /// driver unchanged; anything else is treated as a `SQLite` file path.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty string
    pub fn parse_url(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("Database URL must not be empty");
        }
        if s == "memory://" || s == "memory" {
            Ok(Self::Memory)
        } else if s.starts_with("sqlite:") {
            Ok(Self::Sqlite {
                connection_string: s.to_owned(),
            })
        } else {
            Ok(Self::Sqlite {
                connection_string: format!("sqlite:{s}"),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::Sqlite { connection_string } => connection_string.clone(),
            Self::Memory => "memory://".to_owned(),
        }
    }

    /// Whether this is an in-memory database of either kind
    #[must_use]
    pub fn is_memory(&self) -> bool {
        match self {
            Self::Memory => true,
            Self::Sqlite { connection_string } => connection_string.contains(":memory:"),
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::Sqlite {
            connection_string: defaults::DATABASE_URL.to_owned(),
        }
    }
}

/// Allowed cross-origin callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `["*"]` for any origin, otherwise explicit origins
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether any origin is allowed
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(defaults::CORS_ALLOWED_ORIGINS),
        }
    }
}

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: IpAddr,
    /// HTTP listen port
    pub http_port: u16,
    /// Persistence backend
    pub database: DatabaseUrl,
    /// CORS settings
    pub cors: CorsConfig,
    /// History page size when the caller does not pass `limit`
    pub history_default_limit: u32,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            http_port: ports::DEFAULT_HTTP_PORT,
            database: DatabaseUrl::default(),
            cors: CorsConfig::default(),
            history_default_limit: limits::DEFAULT_HISTORY_LIMIT,
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_config::HOST, defaults::HOST)
                .parse()
                .context("Invalid HOST value")?,
            http_port: env_var_or(env_config::HTTP_PORT, &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            database: DatabaseUrl::parse_url(&env_var_or(
                env_config::DATABASE_URL,
                defaults::DATABASE_URL,
            ))
            .context("Invalid DATABASE_URL value")?,
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(
                    env_config::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                )),
            },
            history_default_limit: env_var_or(
                env_config::HISTORY_DEFAULT_LIMIT,
                &limits::DEFAULT_HISTORY_LIMIT.to_string(),
            )
            .parse::<u32>()
            .context("Invalid HISTORY_DEFAULT_LIMIT value")?
            .clamp(1, limits::MAX_HISTORY_LIMIT),
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Socket address the HTTP server binds to
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Clamp a caller-supplied history limit, falling back to the configured default
    #[must_use]
    pub fn effective_history_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.history_default_limit)
            .clamp(1, limits::MAX_HISTORY_LIMIT)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fitness Coach API Configuration:\n\
             - Environment: {}\n\
             - Listen: {}\n\
             - Database: {}\n\
             - CORS Origins: {}\n\
             - History Default Limit: {}",
            self.environment,
            self.bind_addr(),
            match &self.database {
                DatabaseUrl::Memory => "in-memory",
                DatabaseUrl::Sqlite { .. } if self.database.is_memory() => "SQLite (in-memory)",
                DatabaseUrl::Sqlite { .. } => "SQLite",
            },
            self.cors.allowed_origins.join(", "),
            self.history_default_limit,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("https://a.example, https://b.example ,"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(DatabaseUrl::parse_url("memory://").unwrap(), DatabaseUrl::Memory);
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
            DatabaseUrl::Sqlite {
                connection_string: "sqlite::memory:".into()
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("./data/coach.db")
                .unwrap()
                .to_connection_string(),
            "sqlite:./data/coach.db"
        );
        assert!(DatabaseUrl::parse_url("  ").is_err());
        assert!(DatabaseUrl::parse_url("sqlite::memory:").unwrap().is_memory());
    }

    #[test]
    fn test_effective_history_limit() {
        let config = ServerConfig::default();
        assert_eq!(config.effective_history_limit(None), 15);
        assert_eq!(config.effective_history_limit(Some(0)), 1);
        assert_eq!(config.effective_history_limit(Some(5)), 5);
        assert_eq!(config.effective_history_limit(Some(10_000)), 100);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PRODUCTION"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_mentions_listen_address() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("127.0.0.1:8081"));
        assert!(summary.contains("SQLite"));
    }
}
