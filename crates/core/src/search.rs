//! List pagination helpers.
//!
//! Lives in `core` so both the repository layer and handlers share the same
//! bounds.

/// Default page size for admin list endpoints.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Upper bound on page size for admin list endpoints.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Turn free-text input into an `ILIKE` pattern, escaping wildcards.
///
/// Returns `None` for empty or whitespace-only input.
///
/// ```
/// use schoolhouse_core::search::like_pattern;
/// assert_eq!(like_pattern(" ravi "), Some("%ravi%".to_string()));
/// assert_eq!(like_pattern("50%"), Some("%50\\%%".to_string()));
/// assert_eq!(like_pattern("   "), None);
/// ```
pub fn like_pattern(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut escaped = String::with_capacity(trimmed.len() + 2);
    escaped.push('%');
    for c in trimmed.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    Some(escaped)
}
