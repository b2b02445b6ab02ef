// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise catalogue service.

use serde::Serialize;
use std::collections::HashSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::{Exercise, ExerciseOrder, NewExercise};

/// Result of seeding the default catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SeedOutcome {
    /// Defaults inserted by this call
    pub added: u32,
    /// Defaults skipped because an exercise with that name existed
    pub skipped: u32,
}

impl SeedOutcome {
    pub fn message(&self) -> String {
        if self.added == 0 {
            "All default exercises already exist!".to_string()
        } else {
            format!(
                "Added {} new exercises! ({} already existed)",
                self.added, self.skipped
            )
        }
    }
}

/// Manages the shared exercise catalogue.
#[derive(Clone)]
pub struct ExerciseService {
    db: Store,
}

impl ExerciseService {
    pub fn new(db: Store) -> Self {
        Self { db }
    }

    pub async fn list(&self, order: ExerciseOrder) -> Result<Vec<Exercise>> {
        self.db
            .list_exercises(order)
            .await
            .map_err(AppError::failed("Failed to load exercises."))
    }

    /// Add one exercise; name and day are trimmed and required.
    pub async fn add(&self, request: NewExercise) -> Result<Exercise> {
        let exercise = request.into_exercise()?;
        let saved = self
            .db
            .add_exercise(&exercise)
            .await
            .map_err(AppError::failed("Failed to add exercise."))?;

        tracing::info!(id = ?saved.id, name = %saved.name, day = %saved.day, "Exercise added");
        Ok(saved)
    }

    /// Insert every default exercise whose name is not already in the catalogue.
    ///
    /// Inserts run one at a time; if one fails, the ones before it stay.
    pub async fn seed_defaults(&self) -> Result<SeedOutcome> {
        let action = "Failed to add default exercises.";

        let existing: HashSet<String> = self
            .db
            .list_exercises(ExerciseOrder::Unordered)
            .await
            .map_err(AppError::failed(action))?
            .into_iter()
            .map(|e| e.name)
            .collect();

        let defaults = Exercise::defaults();
        let total = defaults.len() as u32;
        let missing: Vec<Exercise> = defaults
            .into_iter()
            .filter(|e| !existing.contains(&e.name))
            .collect();

        for exercise in &missing {
            self.db
                .add_exercise(exercise)
                .await
                .map_err(AppError::failed(action))?;
        }

        let outcome = SeedOutcome {
            added: missing.len() as u32,
            skipped: total - missing.len() as u32,
        };
        tracing::info!(
            added = outcome.added,
            skipped = outcome.skipped,
            "Default exercises seeded"
        );
        Ok(outcome)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.db
            .delete_exercise(id)
            .await
            .map_err(AppError::failed("Failed to delete exercise."))?;

        tracing::info!(id, "Exercise deleted");
        Ok(())
    }
}
