//! CPF (individual taxpayer registry).

use serde::{Deserialize, Serialize};

use super::document::DocumentKind;
use crate::error::{DomainError, FormatError};

/// True when `raw` holds a valid CPF, punctuation ignored.
pub fn is_valid_cpf(raw: &str) -> bool {
    DocumentKind::Cpf.is_valid(raw)
}

/// Formats an 11-digit normalized CPF as `###.###.###-##`.
pub fn format_cpf(normalized: &str) -> Result<String, FormatError> {
    DocumentKind::Cpf.format(normalized)
}

/// A CPF that passed validation, stored as its 11 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits = super::digits::strip_non_digits(raw);
        if !DocumentKind::Cpf.is_valid(&digits) {
            return Err(DomainError::InvalidDocument {
                kind: DocumentKind::Cpf,
                value: raw.to_string(),
            });
        }
        Ok(Self(digits))
    }

    /// The 11 digits without punctuation.
    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn formatted(&self) -> String {
        // Length and digits were checked in `parse`.
        DocumentKind::Cpf.punctuate(&self.0)
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}
