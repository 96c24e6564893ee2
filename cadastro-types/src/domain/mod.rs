//! Domain rules for Brazilian registration data.

pub mod card;
pub mod check_digit;
pub mod cnpj;
pub mod cpf;
pub mod digits;
pub mod document;
pub mod email;
pub mod phone;
pub mod postal_code;
pub mod tax_id;

pub use card::is_valid_card_number;
pub use check_digit::{Weighting, check_digits, verifier_digit};
pub use cnpj::{Cnpj, format_cnpj, is_valid_cnpj};
pub use cpf::{Cpf, format_cpf, is_valid_cpf};
pub use digits::{DigitSequence, strip_non_digits, strip_optional};
pub use document::{CNPJ_REJECT_LIST, CPF_REJECT_LIST, DocumentKind, is_valid_cpf_or_cnpj};
pub use email::is_valid_email;
pub use phone::{is_valid_phone, normalize_phone};
pub use postal_code::{is_valid_postal_code, normalize_postal_code};
pub use tax_id::TaxId;
