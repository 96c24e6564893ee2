//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use cadastro_types::domain::DocumentKind;
use cadastro_types::dto::{
    BillingType, CreateChargeRequest, CreateCustomerRequest, CreateSubscriptionRequest,
    CreditCard, CreditCardHolderInfo, CycleType, Discount, DiscountType, DocumentCheckRequest,
    DocumentCheckResponse, FieldCheckRequest, FieldCheckResponse, Fine, FormatRequest,
    FormatResponse, Interest, RefundRequest, SubscriptionTerms, UpdateSubscriptionRequest,
};
use cadastro_types::{FieldKind, FieldViolation};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Check a CPF or CNPJ
///
/// The kind is detected from the digit count when omitted.
#[utoipa::path(
    post,
    path = "/api/documents/validate",
    tag = "documents",
    request_body = DocumentCheckRequest,
    responses(
        (status = 200, description = "Check result", body = DocumentCheckResponse)
    )
)]
async fn check_document() {}

/// Format a normalized CPF or CNPJ
#[utoipa::path(
    post,
    path = "/api/documents/format",
    tag = "documents",
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Formatted document", body = FormatResponse),
        (status = 400, description = "Wrong length or non-digit input")
    )
)]
async fn format_document() {}

/// Run a single field rule
#[utoipa::path(
    post,
    path = "/api/fields/validate",
    tag = "fields",
    request_body = FieldCheckRequest,
    responses(
        (status = 200, description = "Rule result", body = FieldCheckResponse)
    )
)]
async fn check_field() {}

/// Validate a customer payload
#[utoipa::path(
    post,
    path = "/api/customers/validate",
    tag = "payloads",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Normalized customer", body = CreateCustomerRequest),
        (status = 400, description = "One or more fields are invalid")
    )
)]
async fn validate_customer() {}

/// Validate a charge payload
#[utoipa::path(
    post,
    path = "/api/charges/validate",
    tag = "payloads",
    request_body = CreateChargeRequest,
    responses(
        (status = 200, description = "Normalized charge", body = CreateChargeRequest),
        (status = 400, description = "One or more fields are invalid")
    )
)]
async fn validate_charge() {}

/// Validate a new subscription payload
#[utoipa::path(
    post,
    path = "/api/subscriptions/validate",
    tag = "payloads",
    request_body = CreateSubscriptionRequest,
    responses(
        (status = 200, description = "Normalized subscription", body = CreateSubscriptionRequest),
        (status = 400, description = "One or more fields are invalid")
    )
)]
async fn validate_subscription() {}

/// Validate a subscription update payload
#[utoipa::path(
    post,
    path = "/api/subscriptions/updates/validate",
    tag = "payloads",
    request_body = UpdateSubscriptionRequest,
    responses(
        (status = 200, description = "Normalized update", body = UpdateSubscriptionRequest),
        (status = 400, description = "One or more fields are invalid")
    )
)]
async fn validate_subscription_update() {}

/// Validate a refund payload
#[utoipa::path(
    post,
    path = "/api/refunds/validate",
    tag = "payloads",
    request_body = RefundRequest,
    responses(
        (status = 200, description = "Refund accepted", body = RefundRequest),
        (status = 400, description = "Refund value is not positive")
    )
)]
async fn validate_refund() {}

/// OpenAPI documentation for the Cadastro API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cadastro Validation API",
        version = "1.0.0",
        description = "Validation of Brazilian registration data: CPF, CNPJ, phone numbers and CEP.\n\nInvalid payloads are answered with `400` and a body listing every failing field:\n\n```\n{\"error\": \"...\", \"code\": 400, \"violations\": [{\"field\": \"cpfCnpj\", \"message\": \"...\"}]}\n```",
        license(name = "MIT"),
    ),
    paths(
        health,
        check_document,
        format_document,
        check_field,
        validate_customer,
        validate_charge,
        validate_subscription,
        validate_subscription_update,
        validate_refund,
    ),
    components(
        schemas(
            DocumentKind,
            FieldKind,
            FieldViolation,
            DocumentCheckRequest,
            DocumentCheckResponse,
            FormatRequest,
            FormatResponse,
            FieldCheckRequest,
            FieldCheckResponse,
            CreateCustomerRequest,
            CreateChargeRequest,
            BillingType,
            Discount,
            DiscountType,
            Interest,
            Fine,
            CreditCard,
            CreditCardHolderInfo,
            CycleType,
            SubscriptionTerms,
            CreateSubscriptionRequest,
            UpdateSubscriptionRequest,
            RefundRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "documents", description = "CPF and CNPJ checks and formatting"),
        (name = "fields", description = "Single field rules"),
        (name = "payloads", description = "Customer, charge, subscription and refund payload validation"),
    )
)]
pub struct ApiDoc;
