//! Intake Application Service
//!
//! Runs the validation core over incoming values and payloads.
//! Contains NO infrastructure logic - pure orchestration and logging.

use cadastro_types::{
    AppError, CreateChargeRequest, CreateCustomerRequest, CreateSubscriptionRequest,
    DocumentCheckResponse, DocumentKind, FieldCheckRequest, FieldCheckResponse, FieldViolation,
    FormatResponse, RefundRequest, TaxId, UpdateSubscriptionRequest, strip_non_digits,
    validator_for,
};

/// Application service for intake validation.
///
/// Stateless: every call is independent, so one instance is shared by all
/// requests.
#[derive(Debug, Clone, Default)]
pub struct IntakeService;

impl IntakeService {
    pub fn new() -> Self {
        Self
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Documents
    // ─────────────────────────────────────────────────────────────────────────────

    /// Checks a CPF or CNPJ, detecting the kind when none is given.
    #[tracing::instrument(skip(self, raw), fields(kind = ?kind))]
    pub fn check_document(&self, kind: Option<DocumentKind>, raw: &str) -> DocumentCheckResponse {
        let normalized = strip_non_digits(raw);
        let kind = kind.or_else(|| DocumentKind::detect(&normalized));

        let document = kind.and_then(|k| TaxId::parse_as(k, &normalized).ok());
        let valid = document.is_some();

        tracing::debug!(digits = normalized.len(), valid, "document checked");

        DocumentCheckResponse {
            kind,
            valid,
            normalized,
            formatted: document.map(|d| d.formatted()),
        }
    }

    /// Formats an already-normalized document.
    pub fn format_document(
        &self,
        kind: DocumentKind,
        normalized: &str,
    ) -> Result<FormatResponse, AppError> {
        let formatted = kind.format(normalized)?;
        Ok(FormatResponse { formatted })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Fields
    // ─────────────────────────────────────────────────────────────────────────────

    /// Runs one registry rule.
    #[tracing::instrument(skip(self, req), fields(field = %req.field, kind = %req.kind))]
    pub fn check_field(&self, req: &FieldCheckRequest) -> FieldCheckResponse {
        let validator = validator_for(req.kind);
        if validator.validate(&req.value) {
            FieldCheckResponse {
                valid: true,
                message: None,
            }
        } else {
            tracing::debug!(rule = validator.name(), "field rejected");
            FieldCheckResponse {
                valid: false,
                message: Some(validator.describe(&req.field, &req.value)),
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payloads
    // ─────────────────────────────────────────────────────────────────────────────

    /// Normalizes and validates a customer, returning the normalized copy.
    #[tracing::instrument(skip(self, req))]
    pub fn validate_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CreateCustomerRequest, AppError> {
        let normalized = req.normalized();
        normalized
            .validate()
            .map_err(|violations| rejected("customer", violations))?;
        Ok(normalized)
    }

    /// Normalizes and validates a charge, returning the normalized copy.
    #[tracing::instrument(skip(self, req), fields(billing_type = ?req.billing_type))]
    pub fn validate_charge(
        &self,
        req: &CreateChargeRequest,
    ) -> Result<CreateChargeRequest, AppError> {
        let normalized = req.normalized();
        normalized
            .validate()
            .map_err(|violations| rejected("charge", violations))?;
        Ok(normalized)
    }

    /// Normalizes and validates a new subscription.
    #[tracing::instrument(skip(self, req), fields(cycle = ?req.terms.cycle))]
    pub fn validate_subscription(
        &self,
        req: &CreateSubscriptionRequest,
    ) -> Result<CreateSubscriptionRequest, AppError> {
        let normalized = req.normalized();
        normalized
            .validate()
            .map_err(|violations| rejected("subscription", violations))?;
        Ok(normalized)
    }

    /// Normalizes and validates a subscription update.
    #[tracing::instrument(skip(self, req), fields(cycle = ?req.terms.cycle))]
    pub fn validate_subscription_update(
        &self,
        req: &UpdateSubscriptionRequest,
    ) -> Result<UpdateSubscriptionRequest, AppError> {
        let normalized = req.normalized();
        normalized
            .validate()
            .map_err(|violations| rejected("subscription_update", violations))?;
        Ok(normalized)
    }

    #[tracing::instrument(skip(self, req))]
    pub fn validate_refund(&self, req: &RefundRequest) -> Result<RefundRequest, AppError> {
        let normalized = req.normalized();
        normalized
            .validate()
            .map_err(|violations| rejected("refund", violations))?;
        Ok(normalized)
    }
}

fn rejected(payload: &str, violations: Vec<FieldViolation>) -> AppError {
    let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    tracing::info!(payload, ?fields, "payload rejected");
    AppError::Validation(violations)
}
