//! Roster Server Library
//!
//! REST API exposing CRUD operations over user records.
//!
//! This library exposes the router and its building blocks so the binary
//! and the integration tests assemble the exact same application.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::{create_app, create_router, App};
pub use state::AppState;
