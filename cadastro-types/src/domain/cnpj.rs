//! CNPJ (legal-entity registry).

use serde::{Deserialize, Serialize};

use super::document::DocumentKind;
use crate::error::{DomainError, FormatError};

/// True when `raw` holds a valid CNPJ, punctuation ignored.
pub fn is_valid_cnpj(raw: &str) -> bool {
    DocumentKind::Cnpj.is_valid(raw)
}

/// Formats a 14-digit normalized CNPJ as `##.###.###/####-##`.
pub fn format_cnpj(normalized: &str) -> Result<String, FormatError> {
    DocumentKind::Cnpj.format(normalized)
}

/// A CNPJ that passed validation, stored as its 14 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits = super::digits::strip_non_digits(raw);
        if !DocumentKind::Cnpj.is_valid(&digits) {
            return Err(DomainError::InvalidDocument {
                kind: DocumentKind::Cnpj,
                value: raw.to_string(),
            });
        }
        Ok(Self(digits))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn formatted(&self) -> String {
        DocumentKind::Cnpj.punctuate(&self.0)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::check_digit::check_digits;
    use crate::domain::digits::strip_non_digits;
    use proptest::prelude::*;

    const VALID: &str = "11444777000161";

    #[test]
    fn test_known_valid_cnpj() {
        assert!(is_valid_cnpj(VALID));
        assert!(is_valid_cnpj("11.444.777/0001-61"));
        assert!(is_valid_cnpj("00.623.904/0001-73"));
    }

    #[test]
    fn test_truncated_or_padded_is_invalid() {
        assert!(!is_valid_cnpj(&VALID[..13]));
        assert!(!is_valid_cnpj(&format!("{}0", VALID)));
        assert!(!is_valid_cnpj(&format!("0{}", VALID)));
    }

    #[test]
    fn test_tail_comparison_checks_both_digits() {
        assert!(!is_valid_cnpj("11444777000162"));
        assert!(!is_valid_cnpj("11444777000151"));
        assert!(!is_valid_cnpj("00.623.904/0001-71"));
        assert!(!is_valid_cnpj("00.623.904/0001-53"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in '0'..='9' {
            let value: String = std::iter::repeat_n(d, 14).collect();
            assert!(!is_valid_cnpj(&value), "{} should be rejected", value);
        }
    }

    #[test]
    fn test_valid_cpf_is_not_a_cnpj() {
        assert!(!is_valid_cnpj("249.715.637-92"));
    }

    #[test]
    fn test_format_cnpj() {
        assert_eq!(format_cnpj(VALID).unwrap(), "11.444.777/0001-61");
        assert!(format_cnpj("24971563792").is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let cnpj = Cnpj::parse("11.444.777/0001-61").unwrap();
        assert_eq!(cnpj.digits(), "11444777000161");
        assert_eq!(cnpj.to_string(), "11.444.777/0001-61");
        assert_eq!(cnpj.formatted(), format_cnpj(cnpj.digits()).unwrap());
        assert!(Cnpj::parse("11.444.777/0001-60").is_err());
    }

    proptest! {
        #[test]
        fn wrong_length_never_valid(s in "[0-9]{0,30}") {
            prop_assume!(s.len() != 14);
            prop_assert!(!is_valid_cnpj(&s));
        }

        #[test]
        fn computed_digits_validate(base in "[0-9]{12}") {
            let digits: Vec<u8> = base.bytes().map(|b| b - b'0').collect();
            let check = check_digits(&digits, DocumentKind::Cnpj.weighting());
            let normalized = format!("{}{}{}", base, check[0], check[1]);
            prop_assume!(!DocumentKind::Cnpj.reject_list().contains(&normalized.as_str()));
            prop_assert!(is_valid_cnpj(&normalized));
            let formatted = format_cnpj(&normalized).unwrap();
            prop_assert_eq!(strip_non_digits(&formatted), normalized);
        }
    }
}
