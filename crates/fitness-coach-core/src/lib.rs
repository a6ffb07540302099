// ABOUTME: Core types and constants for the Fitness Coach assessment platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Coach Core
//!
//! Foundation crate providing shared types and constants for the Fitness Coach
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP mapping
//! - **constants**: Application-wide constants organized by domain
//! - **models**: User profile, assessment type and persisted assessment record

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `AssessmentType`, `AssessmentRecord`)
pub mod models;
