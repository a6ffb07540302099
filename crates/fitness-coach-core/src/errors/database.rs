// ABOUTME: Conversion from sqlx errors into the unified AppError
// ABOUTME: Every persistence failure surfaces as a DATABASE_ERROR internal error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AppError;

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string()).with_source(error)
    }
}
