//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequest, Request, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use cadastro_types::{
    AppError, CreateChargeRequest, CreateCustomerRequest, CreateSubscriptionRequest,
    DocumentCheckRequest, FieldCheckRequest, FormatRequest, RefundRequest,
    UpdateSubscriptionRequest,
};

use crate::IntakeService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState {
    pub service: IntakeService,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

/// `Json` extractor whose rejections use the API error body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;

        let message = match &self.0 {
            AppError::BadRequest(msg) => msg.clone(),
            validation @ AppError::Validation(_) => validation.to_string(),
        };

        tracing::debug!("request rejected: {}", message);

        let mut body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });
        if let AppError::Validation(violations) = &self.0 {
            body["violations"] = serde_json::json!(violations);
        }

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Check a CPF or CNPJ.
#[tracing::instrument(skip(state, req))]
pub async fn check_document(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<DocumentCheckRequest>,
) -> impl IntoResponse {
    Json(state.service.check_document(req.kind, &req.value))
}

/// Format a normalized CPF or CNPJ.
#[tracing::instrument(skip(state, req), fields(kind = %req.kind))]
pub async fn format_document(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<FormatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let res = state.service.format_document(req.kind, &req.value)?;
    Ok(Json(res))
}

/// Run a single field rule.
#[tracing::instrument(skip(state, req), fields(field = %req.field))]
pub async fn check_field(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<FieldCheckRequest>,
) -> impl IntoResponse {
    Json(state.service.check_field(&req))
}

/// Validate a customer payload.
#[tracing::instrument(skip(state, req))]
pub async fn validate_customer(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCustomerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = state.service.validate_customer(&req)?;
    Ok(Json(customer))
}

/// Validate a charge payload.
#[tracing::instrument(skip(state, req))]
pub async fn validate_charge(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateChargeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let charge = state.service.validate_charge(&req)?;
    Ok(Json(charge))
}

/// Validate a new subscription payload.
#[tracing::instrument(skip(state, req))]
pub async fn validate_subscription(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateSubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let subscription = state.service.validate_subscription(&req)?;
    Ok(Json(subscription))
}

/// Validate a subscription update payload.
#[tracing::instrument(skip(state, req))]
pub async fn validate_subscription_update(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<UpdateSubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let update = state.service.validate_subscription_update(&req)?;
    Ok(Json(update))
}

/// Validate a refund payload.
#[tracing::instrument(skip(state, req))]
pub async fn validate_refund(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<RefundRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let refund = state.service.validate_refund(&req)?;
    Ok(Json(refund))
}
