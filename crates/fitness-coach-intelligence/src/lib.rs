// ABOUTME: Fitness assessment engine: intent classification, metric calculators, narratives
// ABOUTME: Pure and synchronous; the server and CLI call into it without any I/O of their own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Coach Intelligence
//!
//! Turns a free-text question plus a [`UserProfile`](fitness_coach_core::models::UserProfile)
//! into a structured result and a formatted narrative.
//!
//! ## Modules
//!
//! - **classifier**: keyword rules mapping a question to an `AssessmentType`
//! - **algorithms**: VO2max, BMR/TDEE, BMI and heart-rate zone calculators
//! - **assessment**: dispatch from the classified type to its calculator
//! - **report**: narrative rendering of calculator results
//! - **physiological_constants**: formula coefficients and classification thresholds
//!
//! ## Example
//!
//! ```rust
//! use fitness_coach_core::models::{AssessmentType, UserProfile};
//! use fitness_coach_intelligence::assess;
//!
//! let assessment = assess("What are my heart rate zones?", &UserProfile::default());
//! assert_eq!(assessment.assessment_type, AssessmentType::HeartRate);
//! assert!(assessment.narrative().contains("190 bpm"));
//! ```

/// Metric calculators
pub mod algorithms;

/// Classification and dispatch into a single assessment
pub mod assessment;

/// Keyword-based intent classifier
pub mod classifier;

/// Formula coefficients and thresholds
pub mod physiological_constants;

/// Narrative rendering
pub mod report;

pub use assessment::{assess, Assessment, AssessmentResult, GeneralGuidance};
pub use classifier::classify;
