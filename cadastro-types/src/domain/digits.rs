//! Digit extraction shared by every document and phone validator.

use std::fmt;

/// Removes every character that is not an ASCII digit, keeping order.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Same as [`strip_non_digits`], treating an absent value as empty.
pub fn strip_optional(raw: Option<&str>) -> String {
    raw.map(strip_non_digits).unwrap_or_default()
}

/// The digits of a raw identifier, as numeric values.
///
/// Built once from the input and never modified; check digit computation
/// works on copies of its prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// Extracts the digits of `raw`, discarding everything else.
    pub fn from_raw(raw: &str) -> Self {
        Self(
            raw.bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// The first `n` digits, or the whole sequence when shorter.
    pub fn prefix(&self, n: usize) -> &[u8] {
        &self.0[..n.min(self.0.len())]
    }

    /// The last two digits, if there are at least two.
    pub fn last_two(&self) -> Option<[u8; 2]> {
        match self.0.as_slice() {
            [.., a, b] => Some([*a, *b]),
            _ => None,
        }
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strip_keeps_order() {
        assert_eq!(strip_non_digits("249.715.637-92"), "24971563792");
        assert_eq!(strip_non_digits("(47) 3801-0919"), "4738010919");
    }

    #[test]
    fn test_strip_empty_and_absent() {
        assert_eq!(strip_non_digits(""), "");
        assert_eq!(strip_non_digits("abc-./"), "");
        assert_eq!(strip_optional(None), "");
        assert_eq!(strip_optional(Some("12a3")), "123");
    }

    #[test]
    fn test_strip_ignores_non_ascii_digits() {
        // Arabic-Indic and full-width digits are not part of any Brazilian format.
        assert_eq!(strip_non_digits("١٢٣45６"), "45");
    }

    #[test]
    fn test_sequence_from_raw() {
        let seq = DigitSequence::from_raw("11.444.777/0001-61");
        assert_eq!(seq.len(), 14);
        assert_eq!(seq.prefix(3), &[1, 1, 4]);
        assert_eq!(seq.last_two(), Some([6, 1]));
        assert_eq!(seq.to_string(), "11444777000161");
    }

    #[test]
    fn test_sequence_short_inputs() {
        assert_eq!(DigitSequence::from_raw("7").last_two(), None);
        assert!(DigitSequence::from_raw("").is_empty());
        assert_eq!(DigitSequence::from_raw("12").prefix(9), &[1, 2]);
    }

    proptest! {
        #[test]
        fn strip_is_idempotent(s in ".*") {
            let once = strip_non_digits(&s);
            prop_assert_eq!(strip_non_digits(&once), once.clone());
        }

        #[test]
        fn strip_matches_sequence(s in ".*") {
            prop_assert_eq!(DigitSequence::from_raw(&s).to_string(), strip_non_digits(&s));
        }
    }
}
