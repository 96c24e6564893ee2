//! Port traits (interfaces for adapters).
//!
//! The request-validation layer depends on these traits, not on concrete
//! validators.

mod validator;

pub use validator::FieldValidator;
