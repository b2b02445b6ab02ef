// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User roster service.

use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::User;

/// Lists and registers lifters.
#[derive(Clone)]
pub struct UserService {
    db: Store,
}

impl UserService {
    pub fn new(db: Store) -> Self {
        Self { db }
    }

    /// All usernames, in store order.
    pub async fn list_usernames(&self) -> Result<Vec<String>> {
        let users = self
            .db
            .list_users()
            .await
            .map_err(AppError::failed("Failed to load users."))?;
        Ok(users.into_iter().map(|u| u.username).collect())
    }

    /// Register a new user.
    ///
    /// Uniqueness is checked against a fresh listing, not enforced by the
    /// store: two concurrent requests for the same name both succeed and
    /// write the same document.
    pub async fn add_user(&self, username: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username cannot be empty."));
        }

        let action = "Failed to add user.";
        let existing = self
            .db
            .list_users()
            .await
            .map_err(AppError::failed(action))?;
        if existing.iter().any(|u| u.username == username) {
            return Err(AppError::validation("Username already exists."));
        }

        let user = User::new(username);
        self.db
            .set_user(&user)
            .await
            .map_err(AppError::failed(action))?;

        tracing::info!(username = %user.username, "User added");
        Ok(user)
    }
}
