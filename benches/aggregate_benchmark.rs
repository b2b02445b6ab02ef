// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use musclemate::models::progress::progress_series;
use musclemate::models::workout_log::recent_logs;
use musclemate::models::exercise::DEFAULT_EXERCISES;
use musclemate::models::{LogDate, WorkoutLog, WorkoutStats};
use std::hint::black_box;

const LOG_COUNT: usize = 10_000;

/// A few years of training history spread over the default exercises,
/// in scrambled order as the store returns it.
fn synthetic_history() -> Vec<WorkoutLog> {
    let start = Utc.with_ymd_and_hms(2021, 1, 1, 7, 0, 0).unwrap();
    (0..LOG_COUNT)
        .map(|i| {
            let (exercise, _) = DEFAULT_EXERCISES[i % DEFAULT_EXERCISES.len()];
            // Stride through time so the input is not already sorted
            let offset = (i * 7_919) % LOG_COUNT;
            WorkoutLog {
                id: Some(format!("log-{i}")),
                username: "bench".to_string(),
                exercise_name: exercise.to_string(),
                weight: 20 + (i as u32 * 13) % 300,
                reps: 1 + (i as u32 * 7) % 15,
                date: LogDate::from(start + Duration::hours(offset as i64 * 3)),
                notes: None,
            }
        })
        .collect()
}

fn benchmark_aggregations(c: &mut Criterion) {
    let logs = synthetic_history();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let squats: Vec<WorkoutLog> = logs
        .iter()
        .filter(|log| log.exercise_name == "Squat")
        .cloned()
        .collect();

    let mut group = c.benchmark_group("aggregations");

    group.bench_function("stats_10k_logs", |b| {
        b.iter(|| WorkoutStats::from_logs_at(black_box(&logs), now))
    });

    group.bench_function("recent_logs_10k_logs", |b| {
        b.iter(|| recent_logs(black_box(logs.clone())))
    });

    group.bench_function("progress_series_one_exercise", |b| {
        b.iter(|| progress_series(black_box(squats.clone())))
    });

    group.finish();
}

criterion_group!(benches, benchmark_aggregations);
criterion_main!(benches);
