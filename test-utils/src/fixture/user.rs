//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;

pub const DEFAULT_ID: i32 = 1;
pub const DEFAULT_EMAIL: &str = "writer@example.com";
pub const DEFAULT_NAME: &str = "Writer";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - email: `"writer@example.com"`
/// - name: `"Writer"`
/// - password_hash: `"not-a-real-hash"`
/// - created_at: `2026-01-01T00:00:00Z`
pub fn entity() -> user::Model {
    user::Model {
        id: DEFAULT_ID,
        email: DEFAULT_EMAIL.to_string(),
        name: DEFAULT_NAME.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}
