//! Parsing helpers for Discord snowflakes.
//!
//! Discord ids are stored as strings in the database and submitted as strings in
//! forms. Stored ids are trusted and a failure to parse them indicates corrupted
//! data, while submitted ids are untrusted and simply rejected.

use sea_orm::DbErr;

/// Parses a Discord id read from the database.
///
/// # Arguments
/// - `value` - Stored id string
///
/// # Returns
/// - `Ok(u64)` - Parsed id
/// - `Err(DbErr::Custom)` - The stored value is not a valid u64
pub fn parse_stored_id(value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse stored id '{}': {}", value, e)))
}

/// Parses a Discord id submitted by a user.
///
/// Surrounding whitespace is ignored. Zero is not a valid snowflake.
///
/// # Returns
/// - `Some(u64)` - A usable, non-zero id
/// - `None` - The value is empty, non-numeric, or zero
pub fn parse_snowflake(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|id| *id != 0)
}

/// Splits a stored comma-joined id list.
///
/// Empty segments are skipped so both `None` and `""` yield an empty list.
pub fn split_id_list(value: Option<&str>) -> Result<Vec<u64>, DbErr> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_stored_id)
        .collect()
}

/// Joins ids for storage, returning `None` for an empty list.
pub fn join_id_list(ids: &[u64]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }

    Some(
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(","),
    )
}
