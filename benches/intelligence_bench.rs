// ABOUTME: Criterion benchmarks for the assessment engine
// ABOUTME: Measures classification, each calculator, and the full classify-calculate-render pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the assessment engine.
//!
//! Measures keyword classification, the individual calculators, and the full
//! pipeline from question to rendered narrative.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitness_coach_api::intelligence::algorithms::{
    calculate_bmi, calculate_energy_expenditure, calculate_heart_rate_zones, estimate_vo2max,
};
use fitness_coach_api::intelligence::{assess, classify};
use fitness_coach_api::models::{ActivityLevel, Gender, UserProfile};

/// Representative questions, one per assessment type
const QUESTIONS: [(&str, &str); 6] = [
    ("vo2_max", "What's my VO2 max?"),
    ("body_fat", "How do I measure body fat?"),
    ("bmr", "How many calories should I eat to lose weight?"),
    ("heart_rate", "What are my heart rate training zones?"),
    ("bmi", "Is my weight healthy for my height?"),
    ("general", "How should I structure my training week?"),
];

fn sample_profile() -> UserProfile {
    UserProfile {
        age: 35,
        weight: 78.0,
        height: 182.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Very,
    }
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for (name, question) in QUESTIONS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &question, |b, q| {
            b.iter(|| classify(black_box(q)));
        });
    }

    let long_question = "Can you help me understand my overall fitness? ".repeat(50);
    group.throughput(Throughput::Bytes(long_question.len() as u64));
    group.bench_function("long_general_question", |b| {
        b.iter(|| classify(black_box(&long_question)));
    });

    group.finish();
}

fn bench_calculators(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculators");
    let profile = sample_profile();

    group.bench_function("vo2max", |b| {
        b.iter(|| estimate_vo2max(black_box(&profile)));
    });
    group.bench_function("energy_expenditure", |b| {
        b.iter(|| calculate_energy_expenditure(black_box(&profile)));
    });
    group.bench_function("bmi", |b| {
        b.iter(|| calculate_bmi(black_box(profile.weight), black_box(profile.height)));
    });
    group.bench_function("heart_rate_zones", |b| {
        b.iter(|| calculate_heart_rate_zones(black_box(profile.age)));
    });

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("assessment_pipeline");
    let profile = sample_profile();

    for (name, question) in QUESTIONS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &question, |b, q| {
            b.iter(|| assess(black_box(q), black_box(&profile)).narrative());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classification,
    bench_calculators,
    bench_full_pipeline
);
criterion_main!(benches);
