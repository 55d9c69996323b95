use crate::error::StorageError;
use crate::{seed, users, UserTable};
use async_trait::async_trait;
use chrono::Utc;
use roster_core::{error::Result, store::UserStore, types::*};
use std::sync::{Mutex, MutexGuard};

/// In-memory storage for user records
///
/// A single mutex serialises every read and mutation. The guard is only
/// held inside synchronous table calls, never across an await.
#[derive(Debug)]
pub struct MemoryStorage {
    table: Mutex<UserTable>,
}

impl MemoryStorage {
    /// Empty store; the first created user gets id 1
    pub fn new() -> Self {
        Self::from_table(UserTable::new())
    }

    /// Store holding the two seed users, next id 3
    pub fn seeded() -> Self {
        Self::from_table(UserTable::with_records(
            seed::users(),
            seed::NEXT_ID_AFTER_SEED,
        ))
    }

    pub fn from_table(table: UserTable) -> Self {
        Self {
            table: Mutex::new(table),
        }
    }

    /// Number of live records
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> std::result::Result<MutexGuard<'_, UserTable>, StorageError> {
        self.table.lock().map_err(|_| {
            tracing::error!("User table lock poisoned");
            StorageError::LockPoisoned
        })
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl UserStore for MemoryStorage {
    async fn get_all(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&*self.lock()?))
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(users::get_by_id(&*self.lock()?, id))
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        let created = users::create(&mut *self.lock()?, user, Utc::now())?;
        tracing::debug!(id = %created.id, "Created user");
        Ok(created)
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<Option<User>> {
        let updated = users::update(&mut *self.lock()?, id, changes);
        tracing::debug!(id = %id, found = updated.is_some(), "Updated user");
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> Result<bool> {
        let removed = users::delete(&mut *self.lock()?, id);
        tracing::debug!(id = %id, removed, "Deleted user");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn poisoned_lock_surfaces_as_storage_error() {
        let storage = Arc::new(MemoryStorage::seeded());

        let poisoner = Arc::clone(&storage);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.table.lock().unwrap();
            panic!("poison the table");
        })
        .join();

        assert!(matches!(
            storage.len(),
            Err(roster_core::RosterError::Storage(_))
        ));
    }
}
