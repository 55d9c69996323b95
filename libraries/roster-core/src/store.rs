//! Storage trait for user records

use crate::error::Result;
use crate::types::{NewUser, User, UserChanges, UserId};
use async_trait::async_trait;

/// Store of user records
///
/// Implementations own the id counter: ids are assigned on `create`, grow
/// monotonically and are never handed out again after a delete. `get_all`
/// returns records in insertion order.
///
/// Absence is reported through `Option`/`bool`; `Err` is reserved for faults
/// in the backing store itself.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get all users in insertion order
    async fn get_all(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Create a new user, assigning the next id and the current time
    async fn create(&self, user: NewUser) -> Result<User>;

    /// Replace name and email of an existing user
    ///
    /// Returns `None` without touching the store when the id is unknown.
    async fn update(&self, id: UserId, changes: UserChanges) -> Result<Option<User>>;

    /// Remove a user
    ///
    /// Returns `true` if a record was removed.
    async fn delete(&self, id: UserId) -> Result<bool>;
}
