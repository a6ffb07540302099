// ABOUTME: Unified error type, error codes, and JSON error body for the Fitness Coach API
// ABOUTME: Collapses every failure into client-input or internal errors at the HTTP boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Errors carry an
//! [`ErrorCode`] that decides which of the two client-visible kinds they map to:
//!
//! - **Client input errors** (400): the request itself is unusable, e.g. a missing
//!   `question` field.
//! - **Internal errors** (500): anything that goes wrong during classification,
//!   calculation, serialization or persistence.

#[cfg(feature = "http-response")]
mod http;

#[cfg(feature = "database-errors")]
mod database;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Generic message returned to clients for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input is present but unusable
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required request field is missing or empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Resource Management (4000-4999)
    /// Requested route or resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration could not be loaded or is invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Persistence failure
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    /// JSON (de)serialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => 400,
            Self::ResourceNotFound => 404,
            Self::ConfigError
            | Self::InternalError
            | Self::DatabaseError
            | Self::SerializationError => 500,
        }
    }

    /// Whether the error is the caller's fault (4xx) rather than ours
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        self.http_status() < 500
    }

    /// Stable string form used in JSON error bodies
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// A required field is missing, e.g. `missing_field("question")`
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing '{field}' in request"),
        )
    }

    /// A required query parameter is missing, e.g. `missing_parameter("user_id")`
    pub fn missing_parameter(name: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing {name} parameter"),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error body
///
/// Client errors carry their own message in `error`. Internal errors always say
/// `"Internal server error"` and move the textual failure into `details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Client-facing error message
    pub error: String,
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Failure detail for internal errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        if error.code.is_client_error() {
            Self {
                error: error.message.clone(),
                code: error.code,
                details: None,
            }
        } else {
            Self {
                error: INTERNAL_ERROR_MESSAGE.to_owned(),
                code: error.code,
                details: Some(error.message.clone()),
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
        assert_eq!(ErrorCode::SerializationError.http_status(), 500);
    }

    #[test]
    fn test_missing_field_message() {
        let error = AppError::missing_field("question");
        assert_eq!(error.message, "Missing 'question' in request");
        assert!(error.code.is_client_error());
    }

    #[test]
    fn test_client_error_body_keeps_message() {
        let body = ErrorResponse::from(&AppError::missing_parameter("user_id"));
        assert_eq!(body.error, "Missing user_id parameter");
        assert_eq!(body.details, None);
    }

    #[test]
    fn test_internal_error_body_hides_message_behind_details() {
        let body = ErrorResponse::from(&AppError::database("disk full"));
        assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
        assert_eq!(body.code, ErrorCode::DatabaseError);
        assert_eq!(body.details.as_deref(), Some("disk full"));
    }

    #[test]
    fn test_error_response_json_shape() {
        let json = serde_json::to_value(ErrorResponse::from(&AppError::internal("boom"))).unwrap();
        assert_eq!(json["error"], "Internal server error");
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["details"], "boom");
    }

    #[test]
    fn test_serde_json_error_converts_to_serialization() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = AppError::from(parse_error);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.source.is_some());
    }
}
