//! Article fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::article;

pub const DEFAULT_ID: i32 = 1;
pub const DEFAULT_TITLE: &str = "Test Article";
pub const DEFAULT_CONTENTS: &str = "Article body";

/// Creates an article entity model with default values, written by the default fixture user.
pub fn entity() -> article::Model {
    let timestamp = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();

    article::Model {
        id: DEFAULT_ID,
        author_id: super::user::DEFAULT_ID,
        title: DEFAULT_TITLE.to_string(),
        cover_url: None,
        contents: DEFAULT_CONTENTS.to_string(),
        created_at: timestamp,
        updated_at: timestamp,
    }
}
