//! Brazilian phone numbers (area code plus subscriber number).

use super::digits::strip_non_digits;

/// Accepted phone lengths, in characters.
pub const PHONE_LENGTHS: [usize; 3] = [10, 11, 12];

/// True when `value` has exactly 10, 11 or 12 characters.
///
/// Only the length is checked, counted in characters: the rule expects the
/// value after digit stripping, and the intake DTOs apply [`normalize_phone`]
/// first. Unstripped input such as `"abcdefghij"` passes on length alone.
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty() && PHONE_LENGTHS.contains(&value.chars().count())
}

/// Strips everything but digits.
pub fn normalize_phone(raw: &str) -> String {
    strip_non_digits(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundaries() {
        assert!(!is_valid_phone("473801091"));
        assert!(is_valid_phone("4738010919"));
        assert!(is_valid_phone("47998781877"));
        assert!(is_valid_phone("554738010919"));
        assert!(!is_valid_phone("5547380109190"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        assert!(is_valid_phone("abcdefghij"));
        assert!(!is_valid_phone(&normalize_phone("abcdefghij")));
    }

    #[test]
    fn test_normalize_then_validate() {
        let phone = normalize_phone("(47) 99878-1877");
        assert_eq!(phone, "47998781877");
        assert!(is_valid_phone(&phone));
    }
}
