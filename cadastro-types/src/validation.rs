//! Field validators and the registry used by intake payloads.
//!
//! Each validator pairs a predicate from [`crate::domain`] with the message
//! shown when it fails. Payload rules resolve validators through
//! [`validator_for`] instead of holding their own copies.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    is_valid_card_number, is_valid_cpf_or_cnpj, is_valid_phone, is_valid_postal_code,
};
use crate::error::{DomainError, FieldViolation};
use crate::ports::FieldValidator;

/// Accepts a valid CPF or a valid CNPJ.
pub struct CpfCnpjValidator;

impl FieldValidator for CpfCnpjValidator {
    fn name(&self) -> &'static str {
        "cpf_cnpj"
    }

    fn validate(&self, value: &str) -> bool {
        is_valid_cpf_or_cnpj(value)
    }

    fn describe(&self, field: &str, value: &str) -> String {
        format!(
            "CPF ou CNPJ inválido '{}: {}', tente novamente com um valor válido!",
            field, value
        )
    }
}

/// Accepts a digits-only phone with 10 to 12 digits.
pub struct PhoneValidator;

impl FieldValidator for PhoneValidator {
    fn name(&self) -> &'static str {
        "phone"
    }

    fn validate(&self, value: &str) -> bool {
        is_valid_phone(value)
    }

    fn describe(&self, field: &str, value: &str) -> String {
        format!(
            "Telefone inválido '{}: {}', tente novamente com um valor válido!",
            field, value
        )
    }
}

/// Accepts a CEP in `#####-###` form.
pub struct PostalCodeValidator;

impl FieldValidator for PostalCodeValidator {
    fn name(&self) -> &'static str {
        "postal_code"
    }

    fn validate(&self, value: &str) -> bool {
        is_valid_postal_code(value)
    }

    fn describe(&self, field: &str, value: &str) -> String {
        format!(
            "CEP inválido '{}: {}', tente novamente com um valor válido!",
            field, value
        )
    }
}

/// Accepts a Luhn-valid card number.
pub struct CardNumberValidator;

impl FieldValidator for CardNumberValidator {
    fn name(&self) -> &'static str {
        "card_number"
    }

    fn validate(&self, value: &str) -> bool {
        is_valid_card_number(value)
    }

    // The card number itself is never echoed back.
    fn describe(&self, _field: &str, _value: &str) -> String {
        "Número de cartão inválido".to_string()
    }
}

/// The kinds of field the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldKind {
    CpfCnpj,
    Phone,
    PostalCode,
    CardNumber,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::CpfCnpj,
        FieldKind::Phone,
        FieldKind::PostalCode,
        FieldKind::CardNumber,
    ];
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::CpfCnpj => "CPF_CNPJ",
            FieldKind::Phone => "PHONE",
            FieldKind::PostalCode => "POSTAL_CODE",
            FieldKind::CardNumber => "CARD_NUMBER",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for FieldKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "CPF_CNPJ" => Ok(FieldKind::CpfCnpj),
            "PHONE" => Ok(FieldKind::Phone),
            "POSTAL_CODE" | "CEP" => Ok(FieldKind::PostalCode),
            "CARD_NUMBER" | "CARD" => Ok(FieldKind::CardNumber),
            _ => Err(DomainError::UnknownFieldKind(s.to_string())),
        }
    }
}

static CPF_CNPJ: CpfCnpjValidator = CpfCnpjValidator;
static PHONE: PhoneValidator = PhoneValidator;
static POSTAL_CODE: PostalCodeValidator = PostalCodeValidator;
static CARD_NUMBER: CardNumberValidator = CardNumberValidator;

/// Resolves the validator for a field kind.
pub fn validator_for(kind: FieldKind) -> &'static dyn FieldValidator {
    match kind {
        FieldKind::CpfCnpj => &CPF_CNPJ,
        FieldKind::Phone => &PHONE,
        FieldKind::PostalCode => &POSTAL_CODE,
        FieldKind::CardNumber => &CARD_NUMBER,
    }
}

/// Runs the registered validator, producing a violation on failure.
pub fn check_field(kind: FieldKind, field: &str, value: &str) -> Option<FieldViolation> {
    let validator = validator_for(kind);
    if validator.validate(value) {
        None
    } else {
        Some(FieldViolation::new(field, validator.describe(field, value)))
    }
}

/// Accumulates violations while a payload is checked.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a registry rule to `value`.
    pub fn check(&mut self, kind: FieldKind, field: &str, value: &str) {
        if let Some(v) = check_field(kind, field, value) {
            self.0.push(v);
        }
    }

    /// Like [`check`](Self::check), skipping absent values.
    pub fn check_optional(&mut self, kind: FieldKind, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.check(kind, field, value);
        }
    }

    /// Requires a non-blank string.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{} não pode ser vazio", field));
        }
    }

    /// Requires a value to be present and non-blank.
    pub fn require_present(&mut self, field: &str, value: Option<&str>) -> bool {
        match value {
            Some(v) if !v.trim().is_empty() => true,
            _ => {
                self.push(field, format!("{} não pode ser vazio", field));
                false
            }
        }
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    /// Adds the violations of a nested object under `prefix.`.
    pub fn nest(&mut self, prefix: &str, inner: Violations) {
        for v in inner.0 {
            self.0.push(FieldViolation::new(
                format!("{}.{}", prefix, v.field),
                v.message,
            ));
        }
    }

    /// Appends violations collected elsewhere, unchanged.
    pub fn extend(&mut self, other: Violations) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), Vec<FieldViolation>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}
