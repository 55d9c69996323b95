//! Domain types for Roster

mod ids;
mod timestamp;
mod user;

pub use ids::UserId;
pub use timestamp::format_timestamp;
pub use user::{NewUser, User, UserChanges};
