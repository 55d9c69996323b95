//! User domain type
use super::timestamp::millis;
use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user record
///
/// `id` and `created_at` are fixed at creation; only `name` and `email`
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier, never reused
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email (not required to be unique)
    pub email: String,

    /// Creation timestamp
    #[serde(with = "millis")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a record from creation input
    pub fn new(id: UserId, user: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: user.name,
            email: user.email,
            created_at,
        }
    }

    /// Apply an update in place
    pub fn apply(&mut self, changes: UserChanges) {
        self.name = changes.name;
        self.email = changes.email;
    }
}

/// Input for creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

impl NewUser {
    /// Create a new user input
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Input for updating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    /// Replacement display name
    pub name: String,
    /// Replacement email
    pub email: String,
}

impl UserChanges {
    /// Create an update input
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
