//! Error types for the cadastro service.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DocumentKind;

/// Formatter precondition violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("{kind} must have {expected} digits, got {actual}")]
    LengthMismatch {
        kind: DocumentKind,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} to format must contain digits only")]
    NonDigit { kind: DocumentKind },
}

/// Domain-level errors (invalid values and unknown names).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid {kind}: {value}")]
    InvalidDocument { kind: DocumentKind, value: String },

    #[error("Not a CPF or CNPJ: {0}")]
    UnrecognizedDocument(String),

    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),

    #[error("Unknown field kind: {0}")]
    UnknownFieldKind(String),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// One rejected field of an intake payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    /// Path of the field, e.g. `creditCardHolderInfo.cpfCnpj`
    #[schema(example = "cpfCnpj")]
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Both variants answer with `400 Bad Request`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The payload failed one or more field rules.
    #[error("{}", join_messages(.0))]
    Validation(Vec<FieldViolation>),
}

impl AppError {
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            AppError::Validation(v) => v,
            _ => &[],
        }
    }
}

/// Messages are joined with `"; "` into a single sentence list.
pub fn join_messages(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<FormatError> for AppError {
    fn from(err: FormatError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
