//! Comment fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::comment;

pub const DEFAULT_ID: i32 = 1;
pub const DEFAULT_CONTENTS: &str = "Nice post";

/// Creates a comment entity model with default values.
///
/// The comment belongs to the default fixture article and user.
pub fn entity() -> comment::Model {
    let timestamp = Utc.with_ymd_and_hms(2026, 1, 3, 0, 0, 0).unwrap();

    comment::Model {
        id: DEFAULT_ID,
        article_id: super::article::DEFAULT_ID,
        author_id: super::user::DEFAULT_ID,
        contents: DEFAULT_CONTENTS.to_string(),
        created_at: timestamp,
        updated_at: timestamp,
    }
}
