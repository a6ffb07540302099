// ABOUTME: Integration tests for the storage backends and the database factory
// ABOUTME: Round trips, ordering and persistence across reopen for SQLite files and memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use fitness_coach_api::config::DatabaseUrl;
use fitness_coach_api::database_plugins::factory::{Database, DatabaseType};
use fitness_coach_api::database_plugins::DatabaseProvider;
use fitness_coach_api::models::{AssessmentRecord, AssessmentType};
use serde_json::json;
use tempfile::TempDir;

fn record_at(user_id: &str, question: &str, minutes_ago: i64) -> AssessmentRecord {
    let mut record = AssessmentRecord::new(
        user_id,
        question,
        AssessmentType::General,
        None,
        format!("answer to {question}"),
    );
    record.timestamp = AssessmentRecord::now() - Duration::minutes(minutes_ago);
    record
}

async fn check_ordering_and_isolation(db: &Database) {
    db.put_assessment(&record_at("u1", "oldest", 30)).await.unwrap();
    db.put_assessment(&record_at("u1", "newest", 0)).await.unwrap();
    db.put_assessment(&record_at("u1", "middle", 10)).await.unwrap();
    db.put_assessment(&record_at("u2", "other user", 5)).await.unwrap();

    let questions: Vec<String> = db
        .query_assessments("u1", 15)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.question)
        .collect();
    assert_eq!(questions, ["newest", "middle", "oldest"]);

    let limited = db.query_assessments("u1", 2).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].question, "newest");

    assert_eq!(db.query_assessments("u2", 15).await.unwrap().len(), 1);
    assert!(db.query_assessments("u3", 15).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_memory_backend_ordering() {
    common::init_test_logging();
    let db = Database::new("memory://").await.unwrap();
    assert_eq!(db.database_type(), DatabaseType::Memory);
    check_ordering_and_isolation(&db).await;
}

#[tokio::test]
async fn test_sqlite_backend_ordering() {
    common::init_test_logging();
    let db = Database::new("sqlite::memory:").await.unwrap();
    assert_eq!(db.database_type(), DatabaseType::Sqlite);
    check_ordering_and_isolation(&db).await;
}

#[tokio::test]
async fn test_same_timestamp_returns_latest_insert_first() {
    common::init_test_logging();
    for url in ["memory://", "sqlite::memory:"] {
        let db = Database::new(url).await.unwrap();
        let first = record_at("u1", "first", 0);
        let mut second = record_at("u1", "second", 0);
        second.timestamp = first.timestamp;

        db.put_assessment(&first).await.unwrap();
        db.put_assessment(&second).await.unwrap();

        let stored = db.query_assessments("u1", 15).await.unwrap();
        assert_eq!(stored[0].question, "second", "backend {url}");
        assert_eq!(stored[1].question, "first", "backend {url}");
    }
}

#[tokio::test]
async fn test_sqlite_file_survives_reopen() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("coach.db");
    let url = DatabaseUrl::parse_url(path.to_str().unwrap()).unwrap();

    let data = json!({"age": 52, "gender": "female", "activity_level": "light"});
    let record = AssessmentRecord::new(
        "persistent-user",
        "What's my BMR?",
        AssessmentType::Bmr,
        data.as_object(),
        "**Your Metabolic Profile:**",
    );

    {
        let db = Database::from_config(&url).await.unwrap();
        db.put_assessment(&record).await.unwrap();
    }

    let reopened = Database::from_config(&url).await.unwrap();
    let stored = reopened
        .query_assessments("persistent-user", 15)
        .await
        .unwrap();
    assert_eq!(stored, vec![record]);
    assert_eq!(stored[0].user_data_value(), data);
}

#[tokio::test]
async fn test_unsupported_url_is_rejected() {
    let err = Database::new("postgres://localhost/coach").await.unwrap_err();
    assert!(err.message.contains("Unsupported database URL"));
}
