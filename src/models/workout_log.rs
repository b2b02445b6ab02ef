// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout log model, date normalization and chronological views.

use chrono::{DateTime, NaiveDate, Utc};
use firestore::FirestoreTimestamp;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::AppError;
use crate::time_utils::format_day_month_short;

/// Heaviest weight accepted when logging a set.
pub const MAX_WEIGHT: i64 = 800;
/// Most reps accepted when logging a set.
pub const MAX_REPS: i64 = 100;
/// Number of entries in the recent-log view.
pub const RECENT_LOG_LIMIT: usize = 15;

/// When a set was performed, as found in the store.
///
/// Logs written by this service carry a native Firestore timestamp. Older
/// documents may hold a plain value instead (RFC 3339 or `YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogDate {
    Timestamp(FirestoreTimestamp),
    Plain(String),
}

impl LogDate {
    pub fn now() -> Self {
        LogDate::from(Utc::now())
    }

    /// Normalize to an instant. `None` if a plain value is not a recognisable date.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            LogDate::Timestamp(ts) => Some(ts.0),
            LogDate::Plain(raw) => parse_plain_date(raw),
        }
    }
}

impl From<DateTime<Utc>> for LogDate {
    fn from(date: DateTime<Utc>) -> Self {
        LogDate::Timestamp(FirestoreTimestamp(date))
    }
}

fn parse_plain_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// One logged set, stored in the `workoutLogs` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    /// Store-assigned document id (absent until inserted)
    #[serde(alias = "_firestore_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Username of the lifter (copied, not referenced)
    pub username: String,
    /// Exercise name (copied, not referenced)
    pub exercise_name: String,
    pub weight: u32,
    pub reps: u32,
    pub date: LogDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutLog {
    /// Training volume of this set: weight × reps.
    pub fn volume(&self) -> u64 {
        u64::from(self.weight) * u64::from(self.reps)
    }
}

/// Body of `POST /api/logs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutLog {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub exercise_name: String,
    /// Missing counts as 0 so it fails the same check as an empty field.
    #[serde(default)]
    pub weight: i64,
    #[serde(default)]
    pub reps: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewWorkoutLog {
    /// Check the form the same way, and in the same order, the logger view does.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username.trim().is_empty() {
            return Err(AppError::validation("Please select a user."));
        }
        if self.exercise_name.trim().is_empty() {
            return Err(AppError::validation("Please select an exercise."));
        }
        if self.weight < 1 {
            return Err(AppError::validation("Enter a valid weight (>0)."));
        }
        if self.reps < 1 {
            return Err(AppError::validation("Enter valid reps (>0)."));
        }
        if self.weight > MAX_WEIGHT || self.reps > MAX_REPS {
            return Err(AppError::validation("Unrealistic weight/reps."));
        }
        Ok(())
    }

    /// Validate and stamp with `date`.
    pub fn into_log(self, date: LogDate) -> Result<WorkoutLog, AppError> {
        self.validate()?;
        // Bounds checked above, both fit in u32.
        Ok(WorkoutLog {
            id: None,
            username: self.username.trim().to_string(),
            exercise_name: self.exercise_name.trim().to_string(),
            weight: self.weight as u32,
            reps: self.reps as u32,
            date,
            notes: Some(
                self.notes
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string(),
            ),
        })
    }
}

/// Direction of a chronological sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first (progress over time)
    Ascending,
    /// Newest first (recent activity)
    Descending,
}

/// Sort logs by normalized date. Stable: equal dates keep their input order.
///
/// Logs without a recognisable date count as older than every dated log.
pub fn sort_by_date(logs: &mut [WorkoutLog], order: SortOrder) {
    match order {
        SortOrder::Ascending => logs.sort_by_cached_key(|log| log.date.instant()),
        SortOrder::Descending => logs.sort_by_cached_key(|log| Reverse(log.date.instant())),
    }
}

/// Newest [`RECENT_LOG_LIMIT`] logs, newest first.
pub fn recent_logs(mut logs: Vec<WorkoutLog>) -> Vec<WorkoutLog> {
    sort_by_date(&mut logs, SortOrder::Descending);
    logs.truncate(RECENT_LOG_LIMIT);
    logs
}

/// A log as returned by the API, with the date already normalized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogEntry {
    pub id: Option<String>,
    pub username: String,
    pub exercise_name: String,
    pub weight: u32,
    pub reps: u32,
    pub date: Option<DateTime<Utc>>,
    /// `DD/MM/YY`, empty when the stored date is unreadable. A real
    /// two-digit year, not the first eight characters of `DD/MM/YYYY`.
    pub date_label: String,
    pub notes: Option<String>,
}

impl From<WorkoutLog> for LogEntry {
    fn from(log: WorkoutLog) -> Self {
        let date = log.date.instant();
        Self {
            id: log.id,
            username: log.username,
            exercise_name: log.exercise_name,
            weight: log.weight,
            reps: log.reps,
            date,
            date_label: date.map(format_day_month_short).unwrap_or_default(),
            notes: log.notes,
        }
    }
}
