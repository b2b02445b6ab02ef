//! Summary statistics for one lifter.
//!
//! Recomputed from the raw logs on every request; nothing here is stored.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::WorkoutLog;
use crate::time_utils::format_day_month_year;

/// Window counted by `recent_activity`.
pub const RECENT_ACTIVITY_DAYS: i64 = 7;
/// How many personal records the stats view shows.
pub const FEATURED_RECORD_LIMIT: usize = 6;

/// Heaviest logged set for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PersonalRecord {
    pub exercise: String,
    pub weight: u32,
    pub reps: u32,
    pub date: Option<DateTime<Utc>>,
    /// `DD/MM/YYYY`, empty when the stored date is unreadable
    pub date_label: String,
}

/// Aggregates shown on the statistics view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutStats {
    /// Number of logged sets
    pub total_workouts: u32,
    /// Total volume, Σ weight × reps
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_weight: u64,
    /// `total_weight / total_workouts`, one decimal; 0 with no logs
    pub average_weight: f64,
    /// One record per exercise, in order of first appearance
    pub personal_records: Vec<PersonalRecord>,
    /// Sets logged in the last seven days
    pub recent_activity: u32,
}

impl WorkoutStats {
    /// Compute stats as of the current wall-clock time.
    pub fn from_logs(logs: &[WorkoutLog]) -> Self {
        Self::from_logs_at(logs, Utc::now())
    }

    /// Compute stats as of `now`.
    ///
    /// Personal records keep the first log seen with the top weight, so on
    /// exact ties the earlier entry in `logs` wins.
    pub fn from_logs_at(logs: &[WorkoutLog], now: DateTime<Utc>) -> Self {
        let total_workouts = saturating_count(logs.len());
        let total_weight: u64 = logs.iter().map(WorkoutLog::volume).sum();
        let average_weight = if logs.is_empty() {
            0.0
        } else {
            round_to_tenth(total_weight as f64 / logs.len() as f64)
        };

        let mut personal_records: Vec<PersonalRecord> = Vec::new();
        let mut record_index: HashMap<&str, usize> = HashMap::new();

        for log in logs {
            match record_index.get(log.exercise_name.as_str()) {
                Some(&idx) => {
                    if log.weight > personal_records[idx].weight {
                        personal_records[idx] = record_from(log);
                    }
                }
                None => {
                    record_index.insert(&log.exercise_name, personal_records.len());
                    personal_records.push(record_from(log));
                }
            }
        }

        // Inclusive: a set logged exactly seven days ago still counts.
        let window_start = now - Duration::days(RECENT_ACTIVITY_DAYS);
        let recent = logs
            .iter()
            .filter(|log| log.date.instant().is_some_and(|date| date >= window_start))
            .count();
        let recent_activity = saturating_count(recent);

        Self {
            total_workouts,
            total_weight,
            average_weight,
            personal_records,
            recent_activity,
        }
    }

    /// The records the stats view has room for.
    pub fn featured_records(&self) -> &[PersonalRecord] {
        let end = self.personal_records.len().min(FEATURED_RECORD_LIMIT);
        &self.personal_records[..end]
    }
}

fn record_from(log: &WorkoutLog) -> PersonalRecord {
    let date = log.date.instant();
    PersonalRecord {
        exercise: log.exercise_name.clone(),
        weight: log.weight,
        reps: log.reps,
        date,
        date_label: date.map(format_day_month_year).unwrap_or_default(),
    }
}

fn saturating_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
