//! Roster Storage
//!
//! In-memory user store for the Roster service.
//!
//! Records live for the lifetime of the process and are never persisted.
//!
//! # Architecture
//!
//! - **Single lock**: one mutex guards the record table and the id counter,
//!   so every operation sees and leaves a consistent table
//! - **Vertical Slicing**: the `users` slice owns the table operations;
//!   `MemoryStorage` only locks and delegates
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::{NewUser, UserStore};
//! use roster_storage::MemoryStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = MemoryStorage::seeded();
//!
//! let user = storage.create(NewUser::new("Alice", "alice@example.com")).await?;
//! assert_eq!(user.id.as_i64(), 3);
//!
//! let users = storage.get_all().await?;
//! assert_eq!(users.len(), 3);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
pub mod seed;

// Vertical slices
pub mod users;

pub use context::MemoryStorage;
pub use error::StorageError;
pub use users::UserTable;
