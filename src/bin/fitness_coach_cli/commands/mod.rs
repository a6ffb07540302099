// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for fitness-coach-cli
// ABOUTME: Provides access to the ask and history commands

pub mod ask;
pub mod history;
