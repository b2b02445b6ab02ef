// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (keyed by username)
//! - Exercises (generated ids)
//! - Workout logs (generated ids, equality queries only)
//!
//! Log queries never ask Firestore for an order: equality filters on two
//! fields plus `order_by` would need a composite index. Callers sort.

use crate::db::{collections, LogFilter};
use crate::error::AppError;
use crate::models::{Exercise, ExerciseOrder, User, WorkoutLog};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or overwrite a user document keyed by username.
    pub async fn set_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(user.document_id())
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// List the exercise catalogue, optionally ordered by `day`.
    pub async fn list_exercises(&self, order: ExerciseOrder) -> Result<Vec<Exercise>, AppError> {
        let query = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::EXERCISES);

        let result = match order {
            ExerciseOrder::Day => {
                query
                    .order_by([("day", firestore::FirestoreQueryDirection::Ascending)])
                    .obj::<Exercise>()
                    .query()
                    .await
            }
            ExerciseOrder::Unordered => query.obj::<Exercise>().query().await,
        };

        result.map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert an exercise with a Firestore-generated document id.
    pub async fn add_exercise(&self, exercise: &Exercise) -> Result<Exercise, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::EXERCISES)
            .generate_document_id()
            .object(exercise)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete an exercise. Deleting a missing id is not an error in Firestore.
    pub async fn delete_exercise(&self, id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::EXERCISES)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Workout Log Operations ──────────────────────────────────

    /// Query logs by equality on `username` and, optionally, `exerciseName`.
    pub async fn query_logs(&self, filter: LogFilter<'_>) -> Result<Vec<WorkoutLog>, AppError> {
        let username = filter.username.to_string();
        let exercise_name = filter.exercise_name.map(str::to_string);

        self.get_client()?
            .fluent()
            .select()
            .from(collections::WORKOUT_LOGS)
            .filter(move |q| {
                q.for_all([
                    q.field("username").eq(username.clone()),
                    exercise_name
                        .clone()
                        .and_then(|name| q.field("exerciseName").eq(name)),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a workout log with a Firestore-generated document id.
    pub async fn add_workout_log(&self, log: &WorkoutLog) -> Result<WorkoutLog, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::WORKOUT_LOGS)
            .generate_document_id()
            .object(log)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
