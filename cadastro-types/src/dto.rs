//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Intake payloads use the gateway's camelCase field names. `normalized()`
//! applies the input transforms to a copy; `validate()` is meant to run on
//! that copy and reports every failing field at once.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DocumentKind, is_valid_email, normalize_postal_code, strip_non_digits};
use crate::error::FieldViolation;
use crate::validation::{FieldKind, Violations};

// ─────────────────────────────────────────────────────────────────────────────
// Document DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to check a CPF or CNPJ.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentCheckRequest {
    /// Kind to validate against; detected from the digit count when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    /// Raw value, punctuation allowed
    #[schema(example = "249.715.637-92")]
    pub value: String,
}

/// Outcome of a document check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DocumentCheckResponse {
    /// Kind that was checked (absent when it could not be detected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    pub valid: bool,
    /// Digits of the input
    #[schema(example = "24971563792")]
    pub normalized: String,
    /// Canonical display form, only for valid documents
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "249.715.637-92")]
    pub formatted: Option<String>,
}

/// Request to format a normalized CPF or CNPJ.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormatRequest {
    pub kind: DocumentKind,
    /// Digits only, exactly the kind's length
    #[schema(example = "11444777000161")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormatResponse {
    #[schema(example = "11.444.777/0001-61")]
    pub formatted: String,
}

/// Request to run a single registry rule.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldCheckRequest {
    /// Field name used in the rejection message
    #[schema(example = "phone")]
    pub field: String,
    pub kind: FieldKind,
    #[schema(example = "4738010919")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldCheckResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Customer DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to register a customer with the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    /// Customer name
    #[schema(example = "Marcelo Almeida")]
    pub name: String,
    /// Primary e-mail
    #[schema(example = "marcelo.almeida@gmail.com")]
    pub email: String,
    /// Landline phone
    #[schema(example = "4738010919")]
    pub phone: String,
    /// Mobile phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "4799376637")]
    pub mobile_phone: Option<String>,
    /// CPF or CNPJ
    #[schema(example = "24971563792")]
    pub cpf_cnpj: String,
    /// CEP
    #[schema(example = "01310-000")]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Av. Paulista")]
    pub address: Option<String>,
    #[schema(example = "150")]
    pub address_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Sala 201")]
    pub complement: Option<String>,
    /// Neighbourhood
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Bela Vista")]
    pub province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
    /// Comma-separated extra addresses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_emails: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipal_inscription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_inscription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl CreateCustomerRequest {
    /// Copy with phones and `cpfCnpj` reduced to digits and the CEP
    /// re-hyphenated.
    pub fn normalized(&self) -> Self {
        Self {
            phone: strip_non_digits(&self.phone),
            mobile_phone: self.mobile_phone.as_deref().map(strip_non_digits),
            cpf_cnpj: strip_non_digits(&self.cpf_cnpj),
            postal_code: normalize_postal_code(&self.postal_code),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut v = Violations::new();

        v.require("name", &self.name);
        check_email(&mut v, "email", &self.email);
        v.check(FieldKind::Phone, "phone", &self.phone);
        v.check_optional(FieldKind::Phone, "mobilePhone", self.mobile_phone.as_deref());
        v.check(FieldKind::CpfCnpj, "cpfCnpj", &self.cpf_cnpj);
        v.check(FieldKind::PostalCode, "postalCode", &self.postal_code);
        v.require("addressNumber", &self.address_number);

        if let Some(extra) = self.additional_emails.as_deref() {
            for email in extra.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                check_email(&mut v, "additionalEmails", email);
            }
        }

        v.into_result()
    }
}

fn check_email(v: &mut Violations, field: &str, value: &str) {
    if !is_valid_email(value) {
        v.push(field, format!("E-mail inválido '{}: {}'", field, value));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Charge DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// How the customer pays the charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingType {
    Boleto,
    CreditCard,
    Pix,
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Discount applied before the due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 10.0)]
    pub value: Option<f64>,
    /// 0 = until the due date, 1 = until one day before, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 3)]
    pub due_date_limit_days: Option<u32>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
}

/// Monthly interest percentage after the due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Interest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 2.0)]
    pub value: Option<f64>,
}

/// Fine percentage after the due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Fine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 2.0)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    #[schema(example = "João da Silva")]
    pub holder_name: String,
    #[schema(example = "4111111111111111")]
    pub number: String,
    #[schema(example = "12")]
    pub expiry_month: String,
    #[schema(example = "2030")]
    pub expiry_year: String,
    #[schema(example = "123")]
    pub ccv: String,
}

impl CreditCard {
    pub fn normalized(&self) -> Self {
        Self {
            number: strip_non_digits(&self.number),
            ..self.clone()
        }
    }

    fn violations(&self) -> Violations {
        let mut v = Violations::new();
        v.require("holderName", &self.holder_name);
        v.check(FieldKind::CardNumber, "number", &self.number);
        v.require("expiryMonth", &self.expiry_month);
        v.require("expiryYear", &self.expiry_year);
        v.require("ccv", &self.ccv);
        v
    }
}

/// Card holder data, checked with the same rules as a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardHolderInfo {
    #[schema(example = "João da Silva")]
    pub name: String,
    #[schema(example = "joao.silva@gmail.com")]
    pub email: String,
    #[schema(example = "24971563792")]
    pub cpf_cnpj: String,
    #[schema(example = "89223-005")]
    pub postal_code: String,
    #[schema(example = "123")]
    pub address_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_complement: Option<String>,
    #[schema(example = "4738010919")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "47998781877")]
    pub mobile_phone: Option<String>,
}

impl CreditCardHolderInfo {
    pub fn normalized(&self) -> Self {
        Self {
            cpf_cnpj: strip_non_digits(&self.cpf_cnpj),
            postal_code: normalize_postal_code(&self.postal_code),
            phone: strip_non_digits(&self.phone),
            mobile_phone: self.mobile_phone.as_deref().map(strip_non_digits),
            ..self.clone()
        }
    }

    fn violations(&self) -> Violations {
        let mut v = Violations::new();
        v.require("name", &self.name);
        check_email(&mut v, "email", &self.email);
        v.check(FieldKind::CpfCnpj, "cpfCnpj", &self.cpf_cnpj);
        v.check(FieldKind::PostalCode, "postalCode", &self.postal_code);
        v.require("addressNumber", &self.address_number);
        v.check(FieldKind::Phone, "phone", &self.phone);
        v.check_optional(FieldKind::Phone, "mobilePhone", self.mobile_phone.as_deref());
        v
    }
}

/// Request to create a charge for an existing gateway customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChargeRequest {
    /// Gateway customer id
    #[schema(example = "cus_000005321521")]
    pub customer: String,
    pub billing_type: BillingType,
    #[schema(example = "2021-06-10")]
    pub due_date: String,
    #[schema(example = 100.0)]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Pedido 056984")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<f64>,
    /// Send the bank slip by mail
    #[serde(default)]
    pub postal_service: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card_token: Option<String>,
    /// Buyer's IP, required for card charges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "192.0.0.168")]
    pub remote_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card_holder_info: Option<CreditCardHolderInfo>,
}

impl CreateChargeRequest {
    pub fn normalized(&self) -> Self {
        Self {
            credit_card: self.credit_card.as_ref().map(CreditCard::normalized),
            credit_card_holder_info: self
                .credit_card_holder_info
                .as_ref()
                .map(CreditCardHolderInfo::normalized),
            ..self.clone()
        }
    }

    /// Card data is only checked for `CREDIT_CARD` charges.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut v = Violations::new();

        v.require("customer", &self.customer);
        v.require("dueDate", &self.due_date);
        check_positive(
            &mut v,
            "value",
            self.value,
            "O valor da cobrança deve ser positivo",
        );

        if self.billing_type == BillingType::CreditCard {
            v.require_present("remoteIp", self.remote_ip.as_deref());
            check_card_data(
                &mut v,
                self.credit_card.as_ref(),
                self.credit_card_holder_info.as_ref(),
            );
        }

        v.into_result()
    }
}

/// Requires both card blocks and nests their violations under the block name.
fn check_card_data(
    v: &mut Violations,
    card: Option<&CreditCard>,
    holder: Option<&CreditCardHolderInfo>,
) {
    match card {
        Some(card) => v.nest("creditCard", card.violations()),
        None => v.push("creditCard", "creditCard não pode ser vazio"),
    }
    match holder {
        Some(holder) => v.nest("creditCardHolderInfo", holder.violations()),
        None => v.push(
            "creditCardHolderInfo",
            "creditCardHolderInfo não pode ser vazio",
        ),
    }
}

fn check_positive(v: &mut Violations, field: &str, value: f64, message: &str) {
    if !(value.is_finite() && value > 0.0) {
        v.push(field, message);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscription DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Billing period of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CycleType {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiannually,
    Yearly,
}

/// Terms shared by subscription creation and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTerms {
    pub billing_type: BillingType,
    #[schema(example = 100.0)]
    pub value: f64,
    #[schema(example = "2021-06-10")]
    pub next_due_date: String,
    pub cycle: CycleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Pedido 056984")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card_holder_info: Option<CreditCardHolderInfo>,
}

impl SubscriptionTerms {
    pub fn normalized(&self) -> Self {
        Self {
            credit_card: self.credit_card.as_ref().map(CreditCard::normalized),
            credit_card_holder_info: self
                .credit_card_holder_info
                .as_ref()
                .map(CreditCardHolderInfo::normalized),
            ..self.clone()
        }
    }

    /// Card data is only checked for `CREDIT_CARD` subscriptions.
    fn violations(&self) -> Violations {
        let mut v = Violations::new();
        check_positive(
            &mut v,
            "value",
            self.value,
            "O valor da assinatura deve ser positivo",
        );
        v.require("nextDueDate", &self.next_due_date);
        if self.billing_type == BillingType::CreditCard {
            check_card_data(
                &mut v,
                self.credit_card.as_ref(),
                self.credit_card_holder_info.as_ref(),
            );
        }
        v
    }
}

/// Request to subscribe an existing gateway customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    /// Gateway customer id
    #[schema(example = "cus_000005321521")]
    pub customer: String,
    #[serde(flatten)]
    pub terms: SubscriptionTerms,
    /// Last due date for generated payments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "2022-06-10")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 12)]
    pub max_payments: Option<u32>,
}

impl CreateSubscriptionRequest {
    pub fn normalized(&self) -> Self {
        Self {
            terms: self.terms.normalized(),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut v = Violations::new();
        v.require("customer", &self.customer);
        v.extend(self.terms.violations());
        v.into_result()
    }
}

/// Request to change the terms of an existing subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionRequest {
    #[serde(flatten)]
    pub terms: SubscriptionTerms,
    /// Also apply the new terms to payments already generated
    #[serde(default)]
    pub update_pending_payment: bool,
}

impl UpdateSubscriptionRequest {
    pub fn normalized(&self) -> Self {
        Self {
            terms: self.terms.normalized(),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        self.terms.violations().into_result()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Refund DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to refund a paid charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RefundRequest {
    #[schema(example = 10.5)]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Produto não entregue")]
    pub description: Option<String>,
}

impl RefundRequest {
    /// Nothing to transform; kept for symmetry with the other payloads.
    pub fn normalized(&self) -> Self {
        self.clone()
    }

    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut v = Violations::new();
        check_positive(
            &mut v,
            "value",
            self.value,
            "O valor do estorno deve ser positivo",
        );
        v.into_result()
    }
}
