// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store.
//!
//! Mirrors the Firestore collection semantics the app relies on: explicit
//! and generated document ids, equality filters and ordering by `day`.
//! Listings come back in insertion order.

use dashmap::DashMap;
use ring::rand::{SecureRandom, SystemRandom};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::db::LogFilter;
use crate::error::AppError;
use crate::models::{Exercise, ExerciseOrder, User, WorkoutLog};

/// Bytes of randomness per generated id (hex-encoded to 20 characters,
/// the same length as Firestore auto-ids).
const DOCUMENT_ID_BYTES: usize = 10;

/// A document plus its insertion sequence number.
struct Stored<T> {
    seq: u64,
    doc: T,
}

#[derive(Default)]
struct Collections {
    users: DashMap<String, Stored<User>>,
    exercises: DashMap<String, Stored<Exercise>>,
    workout_logs: DashMap<String, Stored<WorkoutLog>>,
    sequence: AtomicU64,
}

impl Collections {
    fn next_seq(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }
}

/// In-memory database. Clones share the same collections.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Collections>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Users ───────────────────────────────────────────────────

    pub fn list_users(&self) -> Vec<User> {
        snapshot(&self.inner.users, |_| true)
    }

    /// Overwrites in place; an existing user keeps its listing position.
    pub fn set_user(&self, user: &User) {
        let seq = self.inner.next_seq();
        self.inner
            .users
            .entry(user.username.clone())
            .and_modify(|stored| stored.doc = user.clone())
            .or_insert_with(|| Stored {
                seq,
                doc: user.clone(),
            });
    }

    // ─── Exercises ───────────────────────────────────────────────

    pub fn list_exercises(&self, order: ExerciseOrder) -> Vec<Exercise> {
        let mut exercises = snapshot(&self.inner.exercises, |_| true);
        if order == ExerciseOrder::Day {
            exercises.sort_by(|a, b| a.day.cmp(&b.day));
        }
        exercises
    }

    pub fn add_exercise(&self, exercise: &Exercise) -> Result<Exercise, AppError> {
        let id = generate_document_id()?;
        let stored = Exercise {
            id: Some(id.clone()),
            ..exercise.clone()
        };
        self.inner.exercises.insert(
            id,
            Stored {
                seq: self.inner.next_seq(),
                doc: stored.clone(),
            },
        );
        Ok(stored)
    }

    pub fn delete_exercise(&self, id: &str) -> Result<(), AppError> {
        self.inner
            .exercises
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Exercise {} not found", id)))
    }

    // ─── Workout Logs ────────────────────────────────────────────

    pub fn query_logs(&self, filter: LogFilter<'_>) -> Vec<WorkoutLog> {
        snapshot(&self.inner.workout_logs, |log| filter.matches(log))
    }

    pub fn add_workout_log(&self, log: &WorkoutLog) -> Result<WorkoutLog, AppError> {
        let id = generate_document_id()?;
        let stored = WorkoutLog {
            id: Some(id.clone()),
            ..log.clone()
        };
        self.inner.workout_logs.insert(
            id,
            Stored {
                seq: self.inner.next_seq(),
                doc: stored.clone(),
            },
        );
        Ok(stored)
    }
}

/// Clone out matching documents in insertion order.
fn snapshot<T, F>(collection: &DashMap<String, Stored<T>>, keep: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let mut docs: Vec<(u64, T)> = collection
        .iter()
        .filter(|entry| keep(&entry.doc))
        .map(|entry| (entry.seq, entry.doc.clone()))
        .collect();
    docs.sort_by_key(|(seq, _)| *seq);
    docs.into_iter().map(|(_, doc)| doc).collect()
}

fn generate_document_id() -> Result<String, AppError> {
    let mut bytes = [0u8; DOCUMENT_ID_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to generate document id")))?;
    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogDate;
    use chrono::{TimeZone, Utc};

    fn make_log(username: &str, exercise: &str, weight: u32) -> WorkoutLog {
        WorkoutLog {
            id: None,
            username: username.to_string(),
            exercise_name: exercise.to_string(),
            weight,
            reps: 5,
            date: LogDate::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            notes: None,
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let db = MemoryDb::new();
        let a = db.add_exercise(&Exercise::new("Squat", "Legs")).unwrap();
        let b = db.add_exercise(&Exercise::new("Squat", "Legs")).unwrap();

        let (a, b) = (a.id.unwrap(), b.id.unwrap());
        assert_eq!(a.len(), DOCUMENT_ID_BYTES * 2);
        assert_ne!(a, b);
        assert_eq!(db.list_exercises(ExerciseOrder::Unordered).len(), 2);
    }

    #[test]
    fn test_set_user_overwrites_same_key() {
        let db = MemoryDb::new();
        db.set_user(&User::new("alice"));
        db.set_user(&User::new("bob"));
        db.set_user(&User::new("alice"));

        let names: Vec<String> = db.list_users().into_iter().map(|u| u.username).collect();
        assert_eq!(names, ["alice", "bob"]);
    }

    #[test]
    fn test_exercises_ordered_by_day() {
        let db = MemoryDb::new();
        for (name, day) in [("Squat", "Legs"), ("Bench Press", "Chest"), ("Plank", "Core")] {
            db.add_exercise(&Exercise::new(name, day)).unwrap();
        }

        let days: Vec<String> = db
            .list_exercises(ExerciseOrder::Day)
            .into_iter()
            .map(|e| e.day)
            .collect();
        assert_eq!(days, ["Chest", "Core", "Legs"]);

        let names: Vec<String> = db
            .list_exercises(ExerciseOrder::Unordered)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Squat", "Bench Press", "Plank"]);
    }

    #[test]
    fn test_delete_missing_exercise() {
        let db = MemoryDb::new();
        let saved = db.add_exercise(&Exercise::new("Dips", "Chest")).unwrap();
        let id = saved.id.unwrap();

        db.delete_exercise(&id).unwrap();
        assert!(db.list_exercises(ExerciseOrder::Unordered).is_empty());
        assert!(matches!(
            db.delete_exercise(&id),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_query_logs_equality_filters() {
        let db = MemoryDb::new();
        db.add_workout_log(&make_log("alice", "Squat", 100)).unwrap();
        db.add_workout_log(&make_log("alice", "Bench Press", 60)).unwrap();
        db.add_workout_log(&make_log("bob", "Squat", 140)).unwrap();

        assert_eq!(db.query_logs(LogFilter::user("alice")).len(), 2);
        assert_eq!(db.query_logs(LogFilter::user("carol")).len(), 0);

        let squats = db.query_logs(LogFilter::user_exercise("alice", "Squat"));
        assert_eq!(squats.len(), 1);
        assert_eq!(squats[0].weight, 100);
        assert!(squats[0].id.is_some());
    }

    #[test]
    fn test_clones_share_collections() {
        let db = MemoryDb::new();
        let other = db.clone();
        other.set_user(&User::new("alice"));
        assert_eq!(db.list_users().len(), 1);
    }
}
