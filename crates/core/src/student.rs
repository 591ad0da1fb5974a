//! Student record rules: contact formats and list ordering.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid regex"));

/// Validate a mobile number: 10 to 15 digits with an optional leading `+`.
pub fn validate_mobile_number(value: &str) -> Result<(), CoreError> {
    if MOBILE_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "mobile_number '{value}' must be 10-15 digits, optionally prefixed with '+'"
        )))
    }
}

/// Sort orders accepted by the student list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentSort {
    #[default]
    Name,
    Registration,
    Newest,
    Oldest,
}

impl StudentSort {
    /// Parse the `sort` query value. `None` yields the default (by name).
    pub fn parse(value: Option<&str>) -> Result<Self, CoreError> {
        match value {
            None | Some("") | Some("name") => Ok(Self::Name),
            Some("registration") => Ok(Self::Registration),
            Some("newest") => Ok(Self::Newest),
            Some("oldest") => Ok(Self::Oldest),
            Some(other) => Err(CoreError::Validation(format!(
                "Invalid sort '{other}'. Must be one of: name, registration, newest, oldest"
            ))),
        }
    }

    /// SQL `ORDER BY` body for this sort. Always ends with `id` for a stable order.
    pub fn order_by(self) -> &'static str {
        match self {
            Self::Name => "student_name ASC, id ASC",
            Self::Registration => "registration_number ASC, id ASC",
            Self::Newest => "registration_datetime DESC, id DESC",
            Self::Oldest => "registration_datetime ASC, id ASC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_accepts_plain_and_prefixed() {
        assert!(validate_mobile_number("9876543210").is_ok());
        assert!(validate_mobile_number("+919876543210").is_ok());
    }

    #[test]
    fn mobile_rejects_short_and_formatted() {
        assert!(validate_mobile_number("98765").is_err());
        assert!(validate_mobile_number("98765-43210").is_err());
        assert!(validate_mobile_number("").is_err());
    }

    #[test]
    fn sort_defaults_to_name() {
        assert_eq!(StudentSort::parse(None).unwrap(), StudentSort::Name);
        assert_eq!(StudentSort::parse(Some("")).unwrap(), StudentSort::Name);
    }

    #[test]
    fn sort_parses_known_keys() {
        assert_eq!(
            StudentSort::parse(Some("registration")).unwrap(),
            StudentSort::Registration
        );
        assert_eq!(StudentSort::parse(Some("newest")).unwrap(), StudentSort::Newest);
        assert_eq!(StudentSort::parse(Some("oldest")).unwrap(), StudentSort::Oldest);
    }

    #[test]
    fn sort_rejects_unknown_keys() {
        assert!(StudentSort::parse(Some("age; DROP TABLE students")).is_err());
    }

    #[test]
    fn order_by_is_stable() {
        assert!(StudentSort::Newest.order_by().ends_with("id DESC"));
        assert!(StudentSort::Name.order_by().ends_with("id ASC"));
    }
}
