//! # Cadastro Types
//!
//! Validation core for Brazilian registration data (CPF, CNPJ, phone, CEP)
//! plus the intake payloads that use it. This crate has ZERO IO
//! dependencies - only data structures, pure rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Normalizer, check digits, CPF/CNPJ validators and formatter,
//!   phone and CEP rules
//! - `ports/` - The `FieldValidator` trait seen by the request layer
//! - `validation` - Concrete field validators and their registry
//! - `dto` - Data Transfer Objects for API boundaries
//! - `error` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;
pub mod validation;

// Re-export commonly used types
pub use domain::{
    Cnpj, Cpf, DocumentKind, TaxId, format_cnpj, format_cpf, is_valid_cnpj, is_valid_cpf,
    is_valid_cpf_or_cnpj, is_valid_phone, is_valid_postal_code, strip_non_digits,
};
pub use dto::*;
pub use error::{AppError, DomainError, FieldViolation, FormatError};
pub use ports::FieldValidator;
pub use validation::{FieldKind, validator_for};
