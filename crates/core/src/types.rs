/// Primary keys of both catalog tables are PostgreSQL `SERIAL` (int4).
pub type DbId = i32;

/// Parse a path segment into a [`DbId`].
///
/// Anything that is not a positive integer yields `None`, so callers can
/// treat a malformed id exactly like an id with no matching row.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok().filter(|id| *id > 0)
}
