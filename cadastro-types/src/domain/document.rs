//! CPF and CNPJ: structural rules, check digit validation and display format.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::check_digit::{Weighting, check_digits};
use super::digits::DigitSequence;
use crate::error::FormatError;

/// Placeholder CPFs that pass the length check but are never real.
pub const CPF_REJECT_LIST: [&str; 10] = [
    "00000000000",
    "11111111111",
    "22222222222",
    "33333333333",
    "44444444444",
    "55555555555",
    "66666666666",
    "77777777777",
    "88888888888",
    "99999999999",
];

/// Placeholder CNPJs that pass the length check but are never real.
pub const CNPJ_REJECT_LIST: [&str; 10] = [
    "00000000000000",
    "11111111111111",
    "22222222222222",
    "33333333333333",
    "44444444444444",
    "55555555555555",
    "66666666666666",
    "77777777777777",
    "88888888888888",
    "99999999999999",
];

/// The two Brazilian taxpayer registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas (individuals).
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (companies).
    Cnpj,
}

impl DocumentKind {
    /// Number of digits in a complete document.
    pub fn expected_len(&self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    /// Number of digits before the two check digits.
    pub fn base_len(&self) -> usize {
        self.expected_len() - 2
    }

    pub fn weighting(&self) -> Weighting {
        match self {
            DocumentKind::Cpf => Weighting::Ascending,
            DocumentKind::Cnpj => Weighting::Cyclic { max: 9 },
        }
    }

    pub fn reject_list(&self) -> &'static [&'static str] {
        match self {
            DocumentKind::Cpf => &CPF_REJECT_LIST,
            DocumentKind::Cnpj => &CNPJ_REJECT_LIST,
        }
    }

    /// Picks the kind whose length matches the digits of `raw`.
    pub fn detect(raw: &str) -> Option<Self> {
        match DigitSequence::from_raw(raw).len() {
            11 => Some(DocumentKind::Cpf),
            14 => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }

    /// Decides whether `raw` holds a valid document of this kind.
    ///
    /// Punctuation is ignored. Never fails: malformed input is simply
    /// invalid.
    pub fn is_valid(&self, raw: &str) -> bool {
        self.validate_digits(&DigitSequence::from_raw(raw))
    }

    pub(crate) fn validate_digits(&self, digits: &DigitSequence) -> bool {
        if digits.len() != self.expected_len() {
            return false;
        }

        let normalized = digits.to_string();
        if self.reject_list().contains(&normalized.as_str()) {
            return false;
        }

        let computed = check_digits(digits.prefix(self.base_len()), self.weighting());
        digits.last_two() == Some(computed)
    }

    /// Inserts the canonical punctuation into a normalized document.
    ///
    /// `normalized` must be exactly [`expected_len`](Self::expected_len)
    /// ASCII digits; anything else is refused.
    pub fn format(&self, normalized: &str) -> Result<String, FormatError> {
        if !normalized.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormatError::NonDigit { kind: *self });
        }
        if normalized.len() != self.expected_len() {
            return Err(FormatError::LengthMismatch {
                kind: *self,
                expected: self.expected_len(),
                actual: normalized.len(),
            });
        }

        Ok(self.punctuate(normalized))
    }

    /// Inserts the punctuation; callers guarantee `expected_len` ASCII digits.
    pub(crate) fn punctuate(&self, d: &str) -> String {
        match self {
            DocumentKind::Cpf => format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11]),
            DocumentKind::Cnpj => format!(
                "{}.{}.{}/{}-{}",
                &d[0..2],
                &d[2..5],
                &d[5..8],
                &d[8..12],
                &d[12..14]
            ),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Cpf => write!(f, "CPF"),
            DocumentKind::Cnpj => write!(f, "CNPJ"),
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = crate::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CPF" => Ok(DocumentKind::Cpf),
            "CNPJ" => Ok(DocumentKind::Cnpj),
            other => Err(crate::error::DomainError::UnknownDocumentKind(other.to_string())),
        }
    }
}

/// Valid if `raw` is either a valid CPF or a valid CNPJ.
pub fn is_valid_cpf_or_cnpj(raw: &str) -> bool {
    let digits = DigitSequence::from_raw(raw);
    DocumentKind::Cpf.validate_digits(&digits) || DocumentKind::Cnpj.validate_digits(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_lists_match_kind_length() {
        for kind in [DocumentKind::Cpf, DocumentKind::Cnpj] {
            for value in kind.reject_list() {
                assert_eq!(value.len(), kind.expected_len());
                let first = value.as_bytes()[0];
                assert!(value.bytes().all(|b| b == first));
            }
        }
    }

    #[test]
    fn test_detect() {
        assert_eq!(DocumentKind::detect("249.715.637-92"), Some(DocumentKind::Cpf));
        assert_eq!(DocumentKind::detect("11.444.777/0001-61"), Some(DocumentKind::Cnpj));
        assert_eq!(DocumentKind::detect("1234"), None);
        assert_eq!(DocumentKind::detect(""), None);
    }

    #[test]
    fn test_format_rejects_wrong_length() {
        let err = DocumentKind::Cpf.format("1234").unwrap_err();
        assert!(matches!(
            err,
            FormatError::LengthMismatch {
                kind: DocumentKind::Cpf,
                expected: 11,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_format_rejects_punctuated_input() {
        let err = DocumentKind::Cnpj.format("11.444.777/0001-61").unwrap_err();
        assert!(matches!(err, FormatError::NonDigit { kind: DocumentKind::Cnpj }));
    }

    #[test]
    fn test_format_matches_mask() {
        for (kind, digits, mask) in [
            (DocumentKind::Cpf, "24971563792", "###.###.###-##"),
            (DocumentKind::Cnpj, "11444777000161", "##.###.###/####-##"),
        ] {
            let formatted = kind.format(digits).unwrap();
            assert_eq!(formatted.len(), mask.len());
            for (c, m) in formatted.chars().zip(mask.chars()) {
                if m == '#' {
                    assert!(c.is_ascii_digit());
                } else {
                    assert_eq!(c, m);
                }
            }
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("cpf".parse::<DocumentKind>().unwrap(), DocumentKind::Cpf);
        assert_eq!(" CNPJ ".parse::<DocumentKind>().unwrap(), DocumentKind::Cnpj);
        assert!("rg".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_cpf_or_cnpj() {
        assert!(is_valid_cpf_or_cnpj("24971563792"));
        assert!(is_valid_cpf_or_cnpj("11.444.777/0001-61"));
        assert!(!is_valid_cpf_or_cnpj("24971563793"));
        assert!(!is_valid_cpf_or_cnpj(""));
    }
}
