/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// A previous holder of the table lock panicked mid-operation
    #[error("User table lock poisoned")]
    LockPoisoned,

    /// No further ids can be assigned
    #[error("User id counter overflowed")]
    IdOverflow,
}

impl From<StorageError> for roster_core::RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::IdOverflow => roster_core::RosterError::IdSpaceExhausted,
            StorageError::LockPoisoned => roster_core::RosterError::storage(err.to_string()),
        }
    }
}
