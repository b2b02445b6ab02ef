// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use musclemate::config::Config;
use musclemate::db::{FirestoreDb, MemoryDb, Store};
use musclemate::routes::create_router;
use musclemate::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app backed by a fresh in-memory store.
/// Returns the router and the store so tests can seed documents directly.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, MemoryDb) {
    let db = MemoryDb::new();
    let state = Arc::new(AppState::new(
        Config::test_default(),
        Store::Memory(db.clone()),
    ));
    (create_router(state), db)
}

/// Create a test app whose store fails every operation.
#[allow(dead_code)]
pub fn create_offline_app() -> axum::Router {
    let state = Arc::new(AppState::new(
        Config::test_default(),
        Store::Firestore(FirestoreDb::new_mock()),
    ));
    create_router(state)
}

/// Send a request and decode the JSON body (`Value::Null` when empty).
#[allow(dead_code)]
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
