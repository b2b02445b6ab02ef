// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User roster API tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{create_test_app, send};

#[tokio::test]
async fn test_add_then_list_users() {
    let (app, _) = create_test_app();

    let (status, body) = send(&app, "POST", "/api/users", Some(json!({ "username": " maya " }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "username": "maya" }));

    send(&app, "POST", "/api/users", Some(json!({ "username": "jon" }))).await;

    let (status, body) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"], json!(["maya", "jon"]));
}

#[tokio::test]
async fn test_empty_username() {
    let (app, db) = create_test_app();

    let (status, body) = send(&app, "POST", "/api/users", Some(json!({ "username": "   " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"], "Username cannot be empty.");
    assert!(db.list_users().is_empty());
}

#[tokio::test]
async fn test_duplicate_username() {
    let (app, db) = create_test_app();
    send(&app, "POST", "/api/users", Some(json!({ "username": "maya" }))).await;

    let (status, body) = send(&app, "POST", "/api/users", Some(json!({ "username": "maya" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], "Username already exists.");
    assert_eq!(db.list_users().len(), 1);
}

#[tokio::test]
async fn test_missing_username_field() {
    let (app, db) = create_test_app();

    let (status, body) = send(&app, "POST", "/api/users", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"], "Username cannot be empty.");
    assert!(db.list_users().is_empty());
}
