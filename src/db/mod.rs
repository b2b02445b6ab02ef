//! Document store layer.
//!
//! [`Store`] is the handle the rest of the crate talks to. It dispatches to
//! Firestore in production and to an in-process store for tests and demos;
//! both backends expose the same collection operations.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::{Config, StoreBackend};
use crate::error::AppError;
use crate::models::{Exercise, ExerciseOrder, User, WorkoutLog};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const EXERCISES: &str = "exercises";
    pub const WORKOUT_LOGS: &str = "workoutLogs";
}

/// Equality filter for workout log queries.
#[derive(Debug, Clone, Copy)]
pub struct LogFilter<'a> {
    pub username: &'a str,
    pub exercise_name: Option<&'a str>,
}

impl<'a> LogFilter<'a> {
    /// All logs for one user.
    pub fn user(username: &'a str) -> Self {
        Self {
            username,
            exercise_name: None,
        }
    }

    /// Logs for one user and one exercise.
    pub fn user_exercise(username: &'a str, exercise_name: &'a str) -> Self {
        Self {
            username,
            exercise_name: Some(exercise_name),
        }
    }

    pub fn matches(&self, log: &WorkoutLog) -> bool {
        log.username == self.username
            && self
                .exercise_name
                .is_none_or(|exercise| log.exercise_name == exercise)
    }
}

/// Handle to the configured document store.
#[derive(Clone)]
pub enum Store {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

impl Store {
    /// Open the backend selected in `config`.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        match config.store_backend {
            StoreBackend::Firestore => Ok(Store::Firestore(
                FirestoreDb::new(&config.gcp_project_id).await?,
            )),
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory document store; data is not persisted");
                Ok(Store::Memory(MemoryDb::default()))
            }
        }
    }

    // ─── Users ───────────────────────────────────────────────────

    /// List every document in `users`.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        match self {
            Store::Firestore(db) => db.list_users().await,
            Store::Memory(db) => Ok(db.list_users()),
        }
    }

    /// Write a user at its explicit key (the username), overwriting any existing document.
    pub async fn set_user(&self, user: &User) -> Result<(), AppError> {
        match self {
            Store::Firestore(db) => db.set_user(user).await,
            Store::Memory(db) => {
                db.set_user(user);
                Ok(())
            }
        }
    }

    // ─── Exercises ───────────────────────────────────────────────

    /// List every document in `exercises`.
    pub async fn list_exercises(&self, order: ExerciseOrder) -> Result<Vec<Exercise>, AppError> {
        match self {
            Store::Firestore(db) => db.list_exercises(order).await,
            Store::Memory(db) => Ok(db.list_exercises(order)),
        }
    }

    /// Insert an exercise under a generated id; returns it with `id` set.
    pub async fn add_exercise(&self, exercise: &Exercise) -> Result<Exercise, AppError> {
        match self {
            Store::Firestore(db) => db.add_exercise(exercise).await,
            Store::Memory(db) => db.add_exercise(exercise),
        }
    }

    pub async fn delete_exercise(&self, id: &str) -> Result<(), AppError> {
        match self {
            Store::Firestore(db) => db.delete_exercise(id).await,
            Store::Memory(db) => db.delete_exercise(id),
        }
    }

    // ─── Workout Logs ────────────────────────────────────────────

    /// Logs matching `filter`, in no particular order.
    pub async fn query_logs(&self, filter: LogFilter<'_>) -> Result<Vec<WorkoutLog>, AppError> {
        match self {
            Store::Firestore(db) => db.query_logs(filter).await,
            Store::Memory(db) => Ok(db.query_logs(filter)),
        }
    }

    /// Insert a log under a generated id; returns it with `id` set.
    pub async fn add_workout_log(&self, log: &WorkoutLog) -> Result<WorkoutLog, AppError> {
        match self {
            Store::Firestore(db) => db.add_workout_log(log).await,
            Store::Memory(db) => db.add_workout_log(log),
        }
    }
}
