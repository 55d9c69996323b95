//! Roster Core
//!
//! Core types, the storage trait, and error handling for the Roster user service.
//!
//! This crate has no knowledge of HTTP or of any particular storage backend;
//! both the server and the storage implementations depend on it.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserId`, `NewUser`, `UserChanges`
//! - **Core Traits**: `UserStore`
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{NewUser, UserId};
//!
//! let id: UserId = "42".parse().unwrap();
//! assert_eq!(id.as_i64(), 42);
//!
//! let new_user = NewUser::new("Alice", "alice@example.com");
//! assert_eq!(new_user.name, "Alice");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use store::UserStore;
pub use types::{format_timestamp, NewUser, User, UserChanges, UserId};
