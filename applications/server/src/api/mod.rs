/// API route modules
pub mod fallback;
pub mod health;
pub mod response;
pub mod users;
