// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models and the pure aggregations computed over them.

pub mod exercise;
pub mod progress;
pub mod stats;
pub mod user;
pub mod workout_log;

pub use exercise::{Exercise, ExerciseOrder, NewExercise};
pub use progress::ProgressPoint;
pub use stats::{PersonalRecord, WorkoutStats};
pub use user::{NewUser, User};
pub use workout_log::{LogDate, LogEntry, NewWorkoutLog, WorkoutLog};
