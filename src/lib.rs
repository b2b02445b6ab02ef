// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! MuscleMate: log lifts, review history and track strength progress.
//!
//! This crate provides the JSON API behind the MuscleMate web app. All
//! persistence is delegated to a document store (Firestore in production);
//! statistics are recomputed from the raw workout logs on every request.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Store;
use services::{ExerciseService, UserService, WorkoutService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Store,
    pub user_service: UserService,
    pub exercise_service: ExerciseService,
    pub workout_service: WorkoutService,
}

impl AppState {
    /// Wire the services up against one store handle.
    pub fn new(config: Config, db: Store) -> Self {
        Self {
            user_service: UserService::new(db.clone()),
            exercise_service: ExerciseService::new(db.clone()),
            workout_service: WorkoutService::new(db.clone()),
            config,
            db,
        }
    }
}
