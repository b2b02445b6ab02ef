// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod exercise;
pub mod user;
pub mod workout;

pub use exercise::{ExerciseService, SeedOutcome};
pub use user::UserService;
pub use workout::WorkoutService;
