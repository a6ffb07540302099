// ABOUTME: Domain service layer for the assessment and history workflows
// ABOUTME: Protocol-agnostic logic shared by the HTTP routes and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers and the CLI stay thin: they parse their input, call a
//! service, and format the result. Services own validation, orchestration and
//! persistence calls, and report failures as `AppError`.

/// Classify, calculate and record a question
pub mod assessment;

/// Read a user's past assessments
pub mod history;

pub use assessment::{AssessmentRequest, AssessmentResponse, AssessmentService};
pub use history::{HistoryEntry, HistoryResponse, HistoryService};
