//! # Cadastro Hex
//!
//! Application service layer and HTTP adapter for the cadastro service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (runs the validation core)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - OpenAPI document served by the adapter

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::IntakeService;
