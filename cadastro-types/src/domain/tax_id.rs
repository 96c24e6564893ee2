//! A validated taxpayer identifier of either kind.

use serde::{Deserialize, Serialize};

use super::cnpj::Cnpj;
use super::cpf::Cpf;
use super::document::DocumentKind;
use crate::error::DomainError;

/// CPF or CNPJ, as accepted in a `cpfCnpj` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaxId {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl TaxId {
    /// Validates `raw` as whichever kind its digit count points to.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match DocumentKind::detect(raw) {
            Some(kind) => Self::parse_as(kind, raw),
            None => Err(DomainError::UnrecognizedDocument(raw.to_string())),
        }
    }

    /// Validates `raw` as a document of the given kind.
    pub fn parse_as(kind: DocumentKind, raw: &str) -> Result<Self, DomainError> {
        match kind {
            DocumentKind::Cpf => Cpf::parse(raw).map(TaxId::Cpf),
            DocumentKind::Cnpj => Cnpj::parse(raw).map(TaxId::Cnpj),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            TaxId::Cpf(_) => DocumentKind::Cpf,
            TaxId::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    pub fn digits(&self) -> &str {
        match self {
            TaxId::Cpf(cpf) => cpf.digits(),
            TaxId::Cnpj(cnpj) => cnpj.digits(),
        }
    }

    pub fn formatted(&self) -> String {
        match self {
            TaxId::Cpf(cpf) => cpf.formatted(),
            TaxId::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for TaxId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaxId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaxId> for String {
    fn from(id: TaxId) -> Self {
        match id {
            TaxId::Cpf(cpf) => cpf.into(),
            TaxId::Cnpj(cnpj) => cnpj.into(),
        }
    }
}
