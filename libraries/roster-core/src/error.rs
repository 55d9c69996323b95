//! Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
///
/// Absence of a record is not an error: store lookups return `Option`
/// and deletes return `bool`. These variants cover infrastructure faults only.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The id counter cannot advance any further
    #[error("User id space exhausted")]
    IdSpaceExhausted,
}

impl RosterError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
