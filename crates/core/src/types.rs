/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse an identifier taken from a URL path segment.
///
/// Only plain decimal integers are accepted (an optional leading `+` is
/// tolerated, surrounding whitespace is not). Anything else yields `None`,
/// which callers treat as "no such record".
pub fn parse_db_id(raw: &str) -> Option<DbId> {
    if raw.is_empty() || raw.trim() != raw {
        return None;
    }
    raw.parse().ok()
}
