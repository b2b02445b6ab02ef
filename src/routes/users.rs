// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User roster routes.

use crate::error::Result;
use crate::models::{NewUser, User};
use crate::AppState;
use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", get(list_users).post(add_user))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UsersResponse {
    pub users: Vec<String>,
}

/// List every username.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<UsersResponse>> {
    let users = state.user_service.list_usernames().await?;
    Ok(Json(UsersResponse { users }))
}

/// Register a user.
async fn add_user(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let Json(body) = body?;
    let user = state.user_service.add_user(&body.username).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
