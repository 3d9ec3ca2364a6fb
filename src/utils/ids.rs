use crate::error::{AdapterError, AdapterResult};

/// Parse an identifier handed in by the framework into a primary key.
///
/// Surrounding whitespace is tolerated; anything else that is not a decimal
/// `i32` is rejected.
///
/// # Errors
///
/// Returns [`AdapterError::InvalidId`] if `value` is not a decimal integer.
pub fn parse_id(entity: &'static str, value: &str) -> AdapterResult<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AdapterError::InvalidId {
            entity,
            value: value.to_string(),
        })
}

/// Render a primary key the way the framework expects identifiers.
pub fn format_id(id: i32) -> String {
    id.to_string()
}
