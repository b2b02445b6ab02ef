// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise catalogue model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Exercises offered by "Add Default Exercises", as (name, day) pairs.
pub const DEFAULT_EXERCISES: &[(&str, &str)] = &[
    ("Bench Press", "Chest"),
    ("Squat", "Legs"),
    ("Deadlift", "Back"),
    ("Overhead Press", "Shoulders"),
    ("Barbell Row", "Back"),
    ("Pull-ups", "Back"),
    ("Dips", "Chest"),
    ("Lunges", "Legs"),
    ("Bicep Curls", "Arms"),
    ("Tricep Extensions", "Arms"),
    ("Plank", "Core"),
    ("Russian Twists", "Core"),
    ("Leg Press", "Legs"),
    ("Lat Pulldown", "Back"),
    ("Chest Fly", "Chest"),
    ("Shoulder Press", "Shoulders"),
    ("Lateral Raises", "Shoulders"),
    ("Hammer Curls", "Arms"),
    ("Calf Raises", "Legs"),
    ("Mountain Climbers", "Cardio"),
];

/// An exercise in the shared catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    /// Store-assigned document id (absent until inserted)
    #[serde(alias = "_firestore_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Exercise name, e.g. "Bench Press"
    pub name: String,
    /// Muscle group / training day label, e.g. "Chest"
    pub day: String,
}

impl Exercise {
    pub fn new(name: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            day: day.into(),
        }
    }

    /// The default catalogue as unsaved exercises.
    pub fn defaults() -> Vec<Exercise> {
        DEFAULT_EXERCISES
            .iter()
            .map(|(name, day)| Exercise::new(*name, *day))
            .collect()
    }
}

/// Body of `POST /api/exercises`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExercise {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub day: String,
}

impl NewExercise {
    /// Trim both fields; both are required.
    pub fn into_exercise(self) -> Result<Exercise, crate::error::AppError> {
        let name = self.name.trim();
        let day = self.day.trim();
        if name.is_empty() || day.is_empty() {
            return Err(crate::error::AppError::validation(
                "Please fill in both name and day.",
            ));
        }
        Ok(Exercise::new(name, day))
    }
}

/// Listing order for the exercise catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseOrder {
    /// Whatever order the store returns
    #[default]
    Unordered,
    /// Grouped by muscle-group label, ascending
    Day,
}
