// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strength-trend series for the progress chart.

use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::workout_log::{sort_by_date, SortOrder, WorkoutLog};
use crate::time_utils::format_day_month_short;

/// Progress index of one set: `(weight × reps) / 10`, unrounded.
pub fn progress_score(log: &WorkoutLog) -> f64 {
    log.volume() as f64 / 10.0
}

/// Display form of a score, two decimals.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// One point on the progress chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProgressPoint {
    /// X-axis label, `DD/MM/YY` with a real two-digit year (not `DD/MM/20`)
    pub label: String,
    pub score: f64,
    /// `score` rounded for the tooltip
    pub score_display: String,
    pub weight: u32,
    pub reps: u32,
    pub date: Option<DateTime<Utc>>,
}

/// Chart series for one user and exercise, oldest first, one point per log.
pub fn progress_series(mut logs: Vec<WorkoutLog>) -> Vec<ProgressPoint> {
    sort_by_date(&mut logs, SortOrder::Ascending);
    logs.iter()
        .map(|log| {
            let score = progress_score(log);
            let date = log.date.instant();
            ProgressPoint {
                label: date.map(format_day_month_short).unwrap_or_default(),
                score,
                score_display: format_score(score),
                weight: log.weight,
                reps: log.reps,
                date,
            }
        })
        .collect()
}
