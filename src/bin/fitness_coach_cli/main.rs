// ABOUTME: Fitness Coach CLI - ask questions locally and inspect stored history
// ABOUTME: Runs the same assessment pipeline as the server without going through HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Ask a question with a partial profile
//! fitness-coach-cli ask "What are my heart rate zones?" --age 40
//!
//! # Ask and record the answer for a user
//! fitness-coach-cli ask "What's my BMI?" --weight 82 --height 180 --user-id alice --save
//!
//! # Show the five most recent assessments for a user
//! fitness-coach-cli history --user-id alice --limit 5
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitness_coach_api::{
    config::{DatabaseUrl, ServerConfig},
    logging::LoggingConfig,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitness-coach-cli",
    about = "Fitness Coach command-line tool",
    long_about = "Answer fitness questions with formula-based assessments and inspect per-user history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Answer a fitness question
    Ask {
        /// The question, e.g. "What's my VO2 max?"
        question: String,

        /// Age in years
        #[arg(long)]
        age: Option<i32>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimeters
        #[arg(long)]
        height: Option<f64>,

        /// Gender ("male" selects the male formulas)
        #[arg(long)]
        gender: Option<String>,

        /// sedentary, light, moderate, very or extra (anything else counts as moderate)
        #[arg(long)]
        activity_level: Option<String>,

        /// User id to record under (a UUID is generated when omitted)
        #[arg(long)]
        user_id: Option<String>,

        /// Record the assessment in the configured database
        #[arg(long)]
        save: bool,
    },

    /// Show stored assessments for a user, newest first
    History {
        /// Whose history to show
        #[arg(long)]
        user_id: String,

        /// Maximum number of entries (1-100)
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(database_url) = cli.database_url {
        config.database =
            DatabaseUrl::parse_url(&database_url).context("Invalid --database-url value")?;
    }
    debug!("Using database: {}", config.database.to_connection_string());

    match cli.command {
        Command::Ask {
            question,
            age,
            weight,
            height,
            gender,
            activity_level,
            user_id,
            save,
        } => {
            let profile = commands::ask::ProfileArgs {
                age,
                weight,
                height,
                gender,
                activity_level,
            };
            commands::ask::run(config, question, profile, user_id, save).await?;
        }
        Command::History { user_id, limit } => {
            commands::history::run(config, &user_id, limit).await?;
        }
    }

    Ok(())
}
