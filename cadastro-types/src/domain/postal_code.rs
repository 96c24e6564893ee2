//! CEP (Código de Endereçamento Postal).

use std::sync::LazyLock;

use regex::Regex;

use super::digits::strip_non_digits;

static CEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("CEP regex"));

/// True when `value` is exactly `#####-###` in ASCII digits.
///
/// The raw value is matched as is; [`normalize_postal_code`] is the
/// intake-side transform that produces this shape from looser input.
pub fn is_valid_postal_code(value: &str) -> bool {
    CEP_RE.is_match(value)
}

/// Strips non-digits and re-inserts the hyphen after the fifth digit.
///
/// The hyphen only appears when more than five digits are present, so short
/// input stays short and fails validation afterwards.
pub fn normalize_postal_code(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    if digits.len() > 5 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_pattern() {
        assert!(is_valid_postal_code("01310-000"));
        assert!(is_valid_postal_code("89223-005"));
        assert!(!is_valid_postal_code("01310000"));
        assert!(!is_valid_postal_code("01310-0000"));
        assert!(!is_valid_postal_code("0131-0000"));
        assert!(!is_valid_postal_code(" 01310-000"));
        assert!(!is_valid_postal_code(""));
    }

    #[test]
    fn test_only_ascii_digits() {
        assert!(!is_valid_postal_code("٠١٣١٠-٠٠٠"));
        assert!(!is_valid_postal_code("０１３１０-０００"));
        assert!(!is_valid_postal_code("01310-00٠"));
    }

    #[test]
    fn test_normalize_postal_code() {
        assert_eq!(normalize_postal_code("01310000"), "01310-000");
        assert_eq!(normalize_postal_code("01.310-000"), "01310-000");
        assert_eq!(normalize_postal_code("0131"), "0131");
        assert_eq!(normalize_postal_code("013100001"), "01310-0001");
        assert!(!is_valid_postal_code(&normalize_postal_code("013100001")));
    }
}
