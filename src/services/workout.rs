// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout logging and the derived history, progress and stats views.
//!
//! Each view is one store query followed by a pure aggregation from
//! [`crate::models`].

use crate::db::{LogFilter, Store};
use crate::error::{AppError, Result};
use crate::models::progress::progress_series;
use crate::models::workout_log::{recent_logs, sort_by_date, SortOrder};
use crate::models::{LogDate, NewWorkoutLog, ProgressPoint, WorkoutLog, WorkoutStats};

const LOAD_LOGS_FAILED: &str = "Failed to load workout logs.";

/// Records sets and computes views over a user's logs.
#[derive(Clone)]
pub struct WorkoutService {
    db: Store,
}

impl WorkoutService {
    pub fn new(db: Store) -> Self {
        Self { db }
    }

    /// Validate and store a set, stamped with the current time.
    pub async fn log_workout(&self, request: NewWorkoutLog) -> Result<WorkoutLog> {
        let log = request.into_log(LogDate::now())?;
        let saved = self
            .db
            .add_workout_log(&log)
            .await
            .map_err(AppError::failed("Failed to log workout."))?;

        tracing::info!(
            username = %saved.username,
            exercise = %saved.exercise_name,
            weight = saved.weight,
            reps = saved.reps,
            "Workout logged"
        );
        Ok(saved)
    }

    /// The newest logs for a user, newest first.
    pub async fn recent_logs(&self, username: &str) -> Result<Vec<WorkoutLog>> {
        let username = require_user(username)?;
        let logs = self.fetch(LogFilter::user(username)).await?;
        Ok(recent_logs(logs))
    }

    /// Progress chart series for one user and exercise.
    pub async fn progress(&self, username: &str, exercise: &str) -> Result<Vec<ProgressPoint>> {
        let username = require_user(username)?;
        let exercise = exercise.trim();
        if exercise.is_empty() {
            return Err(AppError::validation("Please select an exercise."));
        }

        let logs = self
            .fetch(LogFilter::user_exercise(username, exercise))
            .await?;
        Ok(progress_series(logs))
    }

    /// Summary statistics across all of a user's logs.
    ///
    /// Logs are ordered newest first before aggregating, so a personal
    /// record tie goes to the most recent set whatever order the store used.
    pub async fn stats(&self, username: &str) -> Result<WorkoutStats> {
        let username = require_user(username)?;
        let mut logs = self.fetch(LogFilter::user(username)).await?;
        sort_by_date(&mut logs, SortOrder::Descending);
        Ok(WorkoutStats::from_logs(&logs))
    }

    async fn fetch(&self, filter: LogFilter<'_>) -> Result<Vec<WorkoutLog>> {
        let logs = self
            .db
            .query_logs(filter)
            .await
            .map_err(AppError::failed(LOAD_LOGS_FAILED))?;

        tracing::debug!(
            username = filter.username,
            exercise = ?filter.exercise_name,
            count = logs.len(),
            "Fetched workout logs"
        );
        Ok(logs)
    }
}

fn require_user(username: &str) -> Result<&str> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::validation("Please select a user."));
    }
    Ok(username)
}
