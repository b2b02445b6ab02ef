// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Behaviour when the document store is unreachable.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{create_offline_app, create_test_app, send};

#[tokio::test]
async fn test_health_does_not_touch_store() {
    let app = create_offline_app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_status_reports_disconnected() {
    let app = create_offline_app();

    let (status, body) = send(&app, "GET", "/api/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connected"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_status_reports_connected() {
    let (app, _) = create_test_app();

    let (status, body) = send(&app, "GET", "/api/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "connected": true }));
}

#[tokio::test]
async fn test_store_failures_use_action_messages() {
    let app = create_offline_app();

    let cases = [
        ("GET", "/api/users", None, "Failed to load users."),
        ("GET", "/api/exercises", None, "Failed to load exercises."),
        (
            "POST",
            "/api/users",
            Some(json!({ "username": "maya" })),
            "Failed to add user.",
        ),
        (
            "POST",
            "/api/exercises",
            Some(json!({ "name": "Dips", "day": "Chest" })),
            "Failed to add exercise.",
        ),
        ("POST", "/api/exercises/defaults", None, "Failed to add default exercises."),
        ("DELETE", "/api/exercises/abc", None, "Failed to delete exercise."),
        (
            "POST",
            "/api/logs",
            Some(json!({ "username": "maya", "exerciseName": "Dips", "weight": 50, "reps": 10 })),
            "Failed to log workout.",
        ),
        ("GET", "/api/logs/recent?username=maya", None, "Failed to load workout logs."),
        ("GET", "/api/stats?username=maya", None, "Failed to load workout logs."),
    ];

    for (method, uri, body, expected) in cases {
        let (status, response) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        assert_eq!(response["error"], "store_error", "{method} {uri}");
        assert_eq!(response["details"], expected, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_validation_runs_before_store() {
    let app = create_offline_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/logs",
        Some(json!({ "username": "maya", "exerciseName": "Dips", "weight": 0, "reps": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], "Enter a valid weight (>0).");
}
