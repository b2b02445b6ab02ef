// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout log, progress and statistics routes.

use crate::error::Result;
use crate::models::{LogEntry, NewWorkoutLog, PersonalRecord, ProgressPoint, WorkoutStats};
use crate::AppState;
use axum::{
    extract::rejection::JsonRejection,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/logs", post(log_workout))
        .route("/api/logs/recent", get(recent_logs))
        .route("/api/progress", get(get_progress))
        .route("/api/stats", get(get_stats))
}

#[derive(Deserialize)]
struct UserQuery {
    #[serde(default)]
    username: String,
}

#[derive(Deserialize)]
struct ProgressQuery {
    #[serde(default)]
    username: String,
    #[serde(default)]
    exercise: String,
}

// ─── Logging ─────────────────────────────────────────────────

async fn log_workout(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<NewWorkoutLog>, JsonRejection>,
) -> Result<(StatusCode, Json<LogEntry>)> {
    let Json(body) = body?;
    let saved = state.workout_service.log_workout(body).await?;
    Ok((StatusCode::CREATED, Json(LogEntry::from(saved))))
}

// ─── Recent Logs ─────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecentLogsResponse {
    pub logs: Vec<LogEntry>,
}

async fn recent_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserQuery>,
) -> Result<Json<RecentLogsResponse>> {
    let logs = state.workout_service.recent_logs(&params.username).await?;
    Ok(Json(RecentLogsResponse {
        logs: logs.into_iter().map(LogEntry::from).collect(),
    }))
}

// ─── Progress ────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProgressResponse {
    pub points: Vec<ProgressPoint>,
}

async fn get_progress(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProgressQuery>,
) -> Result<Json<ProgressResponse>> {
    let points = state
        .workout_service
        .progress(&params.username, &params.exercise)
        .await?;
    Ok(Json(ProgressResponse { points }))
}

// ─── Stats ───────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: WorkoutStats,
    /// The first few personal records, as many as the stats view shows
    pub featured_records: Vec<PersonalRecord>,
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserQuery>,
) -> Result<Json<StatsResponse>> {
    let stats = state.workout_service.stats(&params.username).await?;
    tracing::debug!(
        username = %params.username,
        total_workouts = stats.total_workouts,
        recent_activity = stats.recent_activity,
        "Computed workout stats"
    );

    Ok(Json(StatsResponse {
        featured_records: stats.featured_records().to_vec(),
        stats,
    }))
}
