//! User table operations
//!
//! Free functions over a [`UserTable`]; callers are responsible for holding
//! whatever lock guards the table.

use crate::error::{Result, StorageError};
use chrono::{DateTime, Utc};
use roster_core::types::{NewUser, User, UserChanges, UserId};
use std::collections::BTreeMap;

/// Records keyed by id plus the next id to assign
///
/// Ids only ever grow, so ascending key order is insertion order.
#[derive(Debug, Clone)]
pub struct UserTable {
    records: BTreeMap<UserId, User>,
    next_id: UserId,
}

impl UserTable {
    /// Empty table whose first id is 1
    pub fn new() -> Self {
        Self::with_records(Vec::new(), UserId::new(1))
    }

    /// Table pre-populated with `records`, continuing from `next_id`
    ///
    /// `next_id` is raised past the highest seeded id if needed so that
    /// ids stay unique.
    pub fn with_records(records: Vec<User>, next_id: UserId) -> Self {
        let records: BTreeMap<UserId, User> =
            records.into_iter().map(|user| (user.id, user)).collect();
        let next_id = records
            .keys()
            .next_back()
            .and_then(|last| last.next())
            .map_or(next_id, |after_last| after_last.max(next_id));

        Self { records, next_id }
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next `create` will assign
    pub fn next_id(&self) -> UserId {
        self.next_id
    }
}

impl Default for UserTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Get all users in insertion order
pub fn get_all(table: &UserTable) -> Vec<User> {
    table.records.values().cloned().collect()
}

/// Get user by ID
pub fn get_by_id(table: &UserTable, id: UserId) -> Option<User> {
    table.records.get(&id).cloned()
}

/// Insert a new user stamped with `created_at`
///
/// The counter advances only once the record is in the table.
pub fn create(table: &mut UserTable, user: NewUser, created_at: DateTime<Utc>) -> Result<User> {
    let id = table.next_id;
    let following = id.next().ok_or(StorageError::IdOverflow)?;

    let record = User::new(id, user, created_at);
    table.records.insert(id, record.clone());
    table.next_id = following;

    Ok(record)
}

/// Update name and email of an existing user
pub fn update(table: &mut UserTable, id: UserId, changes: UserChanges) -> Option<User> {
    let record = table.records.get_mut(&id)?;
    record.apply(changes);
    Some(record.clone())
}

/// Remove a user, returning whether it existed
pub fn delete(table: &mut UserTable, id: UserId) -> bool {
    table.records.remove(&id).is_some()
}
