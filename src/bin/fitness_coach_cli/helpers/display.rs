// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for fitness-coach-cli
// ABOUTME: Provides consistent display functions for assessments and history

use fitness_coach_api::services::{AssessmentResponse, HistoryResponse};

/// Print a single assessment
pub fn display_assessment(response: &AssessmentResponse, saved: bool) {
    println!("{}", response.response);
    println!();
    println!("{}", "=".repeat(60));
    println!("   Type:      {}", response.assessment_type);
    println!("   User ID:   {}", response.user_id);
    println!("   Timestamp: {}", response.timestamp);
    if !saved {
        println!("   (not recorded, pass --save to store it)");
    }
}

/// Print a user's history
pub fn display_history(history: &HistoryResponse) {
    if history.assessments.is_empty() {
        println!("No assessments recorded for {}", history.user_id);
        return;
    }

    println!(
        "{} assessment(s) for {}, newest first",
        history.count, history.user_id
    );
    for entry in &history.assessments {
        println!("{}", "-".repeat(60));
        println!("[{}] {} ({})", entry.timestamp, entry.question, entry.assessment_type);
        if entry.user_data.as_object().is_some_and(|data| !data.is_empty()) {
            println!("   user_data: {}", entry.user_data);
        }
        println!();
        println!("{}", entry.ai_response);
    }
}
