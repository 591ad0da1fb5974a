//! Roll number format and next-number suggestion.
//!
//! A roll number is a zero-padded 6-digit string, unique within a class
//! across every session.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::assignment::AssignmentSnapshot;
use crate::types::DbId;

/// Number of digits in a roll number.
pub const ROLL_NUMBER_DIGITS: usize = 6;

/// Largest value representable in [`ROLL_NUMBER_DIGITS`] digits.
pub const MAX_ROLL_NUMBER: u32 = 999_999;

static ROLL_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("valid regex"));

/// Accepts exactly six ASCII digits.
pub fn validate_roll_number(value: &str) -> bool {
    ROLL_NUMBER_RE.is_match(value)
}

/// Zero-pad a numeric roll number to six digits.
pub fn format_roll_number(value: u32) -> String {
    format!("{value:0width$}", width = ROLL_NUMBER_DIGITS)
}

/// Suggest the next free roll number for `class_id`.
///
/// Takes the highest numeric roll number already used in the class (any
/// session) and adds one. Roll numbers that do not parse are ignored. When the
/// top of the range is taken, the lowest unused number is returned instead.
/// Returns `None` only when every number from `000001` to `999999` is in use.
///
/// # Examples
///
/// ```
/// use schoolhouse_core::roll_number::suggest_next_roll_number;
///
/// assert_eq!(suggest_next_roll_number(&[], 1).as_deref(), Some("000001"));
/// ```
pub fn suggest_next_roll_number<'a, I>(assignments: I, class_id: DbId) -> Option<String>
where
    I: IntoIterator<Item = &'a AssignmentSnapshot>,
{
    let used: BTreeSet<u32> = assignments
        .into_iter()
        .filter(|a| a.class_id == class_id)
        .filter_map(|a| a.roll_number.parse::<u32>().ok())
        .collect();

    next_free(&used).map(format_roll_number)
}

fn next_free(used: &BTreeSet<u32>) -> Option<u32> {
    match used.last() {
        None => Some(1),
        Some(&max) if max < MAX_ROLL_NUMBER => Some(max + 1),
        Some(_) => (1..=MAX_ROLL_NUMBER).find(|n| !used.contains(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(id: DbId, class_id: DbId, session_id: DbId, roll: &str) -> AssignmentSnapshot {
        AssignmentSnapshot {
            id,
            student_id: id,
            class_id,
            session_id,
            roll_number: roll.to_string(),
        }
    }

    #[test]
    fn accepts_six_digits() {
        assert!(validate_roll_number("012345"));
        assert!(validate_roll_number("000000"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!validate_roll_number("12345"));
        assert!(!validate_roll_number("1234567"));
        assert!(!validate_roll_number(""));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(!validate_roll_number("abcdef"));
        assert!(!validate_roll_number("12 456"));
        assert!(!validate_roll_number("١٢٣٤٥٦"));
    }

    #[test]
    fn empty_class_starts_at_one() {
        assert_eq!(suggest_next_roll_number(&[], 7).as_deref(), Some("000001"));
    }

    #[test]
    fn takes_max_plus_one() {
        let existing = vec![
            snapshot(1, 7, 1, "000004"),
            snapshot(2, 7, 1, "000010"),
            snapshot(3, 7, 1, "000002"),
        ];
        assert_eq!(suggest_next_roll_number(&existing, 7).as_deref(), Some("000011"));
    }

    #[test]
    fn spans_all_sessions_of_the_class() {
        let existing = vec![snapshot(1, 7, 1, "000003"), snapshot(2, 7, 2, "000020")];
        assert_eq!(suggest_next_roll_number(&existing, 7).as_deref(), Some("000021"));
    }

    #[test]
    fn ignores_other_classes() {
        let existing = vec![snapshot(1, 8, 1, "000500"), snapshot(2, 7, 1, "000003")];
        assert_eq!(suggest_next_roll_number(&existing, 7).as_deref(), Some("000004"));
        assert_eq!(suggest_next_roll_number(&existing, 9).as_deref(), Some("000001"));
    }

    #[test]
    fn skips_unparseable_roll_numbers() {
        let existing = vec![snapshot(1, 7, 1, "garbage"), snapshot(2, 7, 1, "000009")];
        assert_eq!(suggest_next_roll_number(&existing, 7).as_deref(), Some("000010"));
    }

    #[test]
    fn full_top_of_range_falls_back_to_lowest_gap() {
        let existing = vec![
            snapshot(1, 7, 1, "000001"),
            snapshot(2, 7, 1, "000002"),
            snapshot(3, 7, 1, "999999"),
        ];
        assert_eq!(suggest_next_roll_number(&existing, 7).as_deref(), Some("000003"));
    }

    #[test]
    fn full_class_has_no_suggestion() {
        let mut used: BTreeSet<u32> = (1..=MAX_ROLL_NUMBER).collect();
        assert_eq!(next_free(&used), None);

        used.remove(&500_000);
        assert_eq!(next_free(&used), Some(500_000));
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(format_roll_number(42), "000042");
        assert_eq!(format_roll_number(MAX_ROLL_NUMBER), "999999");
    }
}
