//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// A lifter. Stored in Firestore keyed by the username itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, unique within the `users` collection
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Document id for this user; usernames may contain characters
    /// Firestore rejects in ids (e.g. `/`).
    pub fn document_id(&self) -> String {
        urlencoding::encode(&self.username).into_owned()
    }
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub username: String,
}
