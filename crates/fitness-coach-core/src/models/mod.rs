// ABOUTME: Core data models and types for the Fitness Coach API
// ABOUTME: Re-exports UserProfile, AssessmentType, AssessmentRecord and supporting enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `UserProfile`: biometric inputs with per-field defaults
//! - `Gender`, `ActivityLevel`: lenient enums that never fail to parse
//! - `AssessmentType`: the fixed set of categories a question can be classified into
//! - `AssessmentRecord`: one persisted question/answer interaction

mod assessment;
mod profile;

pub use assessment::{format_timestamp, AssessmentRecord, AssessmentType};
pub use profile::{ActivityLevel, Gender, UserProfile};
