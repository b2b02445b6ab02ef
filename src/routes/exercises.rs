// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise catalogue routes.

use crate::error::Result;
use crate::models::{Exercise, ExerciseOrder, NewExercise};
use crate::AppState;
use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/exercises", get(list_exercises).post(add_exercise))
        .route("/api/exercises/defaults", post(seed_defaults))
        .route("/api/exercises/{id}", delete(delete_exercise))
}

#[derive(Deserialize)]
struct ListQuery {
    /// `day` groups the catalogue by muscle group
    #[serde(default)]
    order: ExerciseOrder,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExercisesResponse {
    pub exercises: Vec<Exercise>,
}

async fn list_exercises(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ExercisesResponse>> {
    let exercises = state.exercise_service.list(params.order).await?;
    Ok(Json(ExercisesResponse { exercises }))
}

async fn add_exercise(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<NewExercise>, JsonRejection>,
) -> Result<(StatusCode, Json<Exercise>)> {
    let Json(body) = body?;
    let exercise = state.exercise_service.add(body).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SeedResponse {
    pub added: u32,
    pub skipped: u32,
    pub message: String,
}

/// Add whichever default exercises are missing from the catalogue.
async fn seed_defaults(State(state): State<Arc<AppState>>) -> Result<Json<SeedResponse>> {
    let outcome = state.exercise_service.seed_defaults().await?;
    Ok(Json(SeedResponse {
        added: outcome.added,
        skipped: outcome.skipped,
        message: outcome.message(),
    }))
}

async fn delete_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.exercise_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
