use serde::Deserialize;

/// Query parameters for paginated listings.
#[derive(Debug, Deserialize)]
pub struct PaginationParam {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
