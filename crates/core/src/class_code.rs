//! Class code format (`A101`-style identifiers).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static CLASS_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]{3}$").expect("valid regex"));

/// Accepts one uppercase ASCII letter followed by exactly three ASCII digits.
pub fn validate_class_code(value: &str) -> bool {
    CLASS_CODE_RE.is_match(value)
}

/// Validate the editable fields of a class, returning a `CoreError::Validation`
/// naming the first bad field.
pub fn validate_class_fields(
    class_number: Option<&str>,
    class_code: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(number) = class_number {
        if number.trim().is_empty() {
            return Err(CoreError::Validation(
                "class_number must not be empty".to_string(),
            ));
        }
    }
    if let Some(code) = class_code {
        if !validate_class_code(code) {
            return Err(CoreError::Validation(format!(
                "class_code '{code}' must be one uppercase letter followed by 3 digits (e.g. A101)"
            )));
        }
    }
    Ok(())
}
