// ABOUTME: Axum IntoResponse integration for AppError
// ABOUTME: Logs every error before turning it into a structured JSON response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorResponse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{error, warn};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.code.is_client_error() {
            warn!(error.code = %self.code, error.message = %self.message, "Rejected request");
        } else {
            error!(
                error.code = %self.code,
                error.message = %self.message,
                error.source = ?self.source,
                "Request failed"
            );
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
