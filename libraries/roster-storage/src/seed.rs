//! Records present in a freshly started service

use chrono::{DateTime, TimeZone, Utc};
use roster_core::types::{User, UserId};

/// First id handed out after seeding
pub const NEXT_ID_AFTER_SEED: UserId = UserId::new(3);

/// The two records every seeded store starts with
pub fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::new(1),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            created_at: midnight_utc(2024, 1, 15),
        },
        User {
            id: UserId::new(2),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            created_at: midnight_utc(2024, 2, 20),
        },
    ]
}

fn midnight_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("seed dates are valid calendar dates")
}
