//! Integration tests for the HTTP adapter.
//!
//! These tests drive the full router (routes, extractors, error mapping)
//! without binding a socket.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use cadastro_hex::{IntakeService, inbound::HttpServer};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    HttpServer::new(IntakeService::new()).router()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn customer() -> Value {
    json!({
        "name": "Marcelo Almeida",
        "email": "marcelo.almeida@gmail.com",
        "phone": "(47) 3801-0919",
        "mobilePhone": "47 99376-6370",
        "cpfCnpj": "11.444.777/0001-61",
        "postalCode": "01310000",
        "addressNumber": "150"
    })
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/documents/validate"].is_object());
}

#[tokio::test]
async fn test_document_validate_detects_kind() {
    let (status, body) = send(post_json(
        "/api/documents/validate",
        json!({ "value": "11.444.777/0001-61" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "CNPJ");
    assert_eq!(body["valid"], true);
    assert_eq!(body["normalized"], "11444777000161");
    assert_eq!(body["formatted"], "11.444.777/0001-61");
}

#[tokio::test]
async fn test_document_validate_invalid_cpf() {
    let (status, body) = send(post_json(
        "/api/documents/validate",
        json!({ "kind": "CPF", "value": "123.456.789-01" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert!(body.get("formatted").is_none());
}

#[tokio::test]
async fn test_document_format() {
    let (status, body) = send(post_json(
        "/api/documents/format",
        json!({ "kind": "CPF", "value": "52998224725" }),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["formatted"], "529.982.247-25");

    let (status, body) = send(post_json(
        "/api/documents/format",
        json!({ "kind": "CNPJ", "value": "1144477700016" }),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_field_validate() {
    let (status, body) = send(post_json(
        "/api/fields/validate",
        json!({ "field": "phone", "kind": "PHONE", "value": "123" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(
        body["message"],
        "Telefone inválido 'phone: 123', tente novamente com um valor válido!"
    );
}

#[tokio::test]
async fn test_customer_validate_returns_normalized_payload() {
    let (status, body) = send(post_json("/api/customers/validate", customer())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phone"], "4738010919");
    assert_eq!(body["mobilePhone"], "47993766370");
    assert_eq!(body["cpfCnpj"], "11444777000161");
    assert_eq!(body["postalCode"], "01310-000");
}

#[tokio::test]
async fn test_customer_validate_lists_every_violation() {
    let mut payload = customer();
    payload["cpfCnpj"] = json!("11.111.111/1111-11");
    payload["phone"] = json!("123");

    let (status, body) = send(post_json("/api/customers/validate", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    let violations = body["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 2);

    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Telefone inválido 'phone: 123'"));
    assert!(error.contains("CPF ou CNPJ inválido 'cpfCnpj: 11111111111111'"));
    assert!(error.contains("; "));
}

#[tokio::test]
async fn test_charge_validate() {
    let payload = json!({
        "customer": "cus_000005321521",
        "billingType": "BOLETO",
        "dueDate": "2021-06-10",
        "value": 100.0
    });
    let (status, _) = send(post_json("/api/charges/validate", payload)).await;
    assert_eq!(status, StatusCode::OK);

    let payload = json!({
        "customer": "cus_000005321521",
        "billingType": "BOLETO",
        "dueDate": "2021-06-10",
        "value": -5.0
    });
    let (status, body) = send(post_json("/api/charges/validate", payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["violations"][0]["field"], "value");
}

#[tokio::test]
async fn test_unknown_billing_type_uses_error_body() {
    let payload = json!({
        "customer": "cus_000005321521",
        "billingType": "CHEQUE",
        "dueDate": "2021-06-10",
        "value": 100.0
    });
    let (status, body) = send(post_json("/api/charges/validate", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["error"].as_str().unwrap().contains("CHEQUE"));
    assert!(body.get("violations").is_none());
}

#[tokio::test]
async fn test_malformed_json_uses_error_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/refunds/validate")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"value\": "))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_missing_content_type_uses_error_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/documents/validate")
        .body(Body::from(json!({ "value": "52998224725" }).to_string()))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_subscription_validate() {
    let payload = json!({
        "customer": "cus_000005321521",
        "billingType": "BOLETO",
        "value": 49.9,
        "nextDueDate": "2021-06-10",
        "cycle": "MONTHLY",
        "endDate": "2022-06-10"
    });
    let (status, body) = send(post_json("/api/subscriptions/validate", payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cycle"], "MONTHLY");
    assert_eq!(body["endDate"], "2022-06-10");

    let payload = json!({
        "billingType": "CREDIT_CARD",
        "value": 49.9,
        "nextDueDate": "2021-06-10",
        "cycle": "MONTHLY"
    });
    let (status, body) = send(post_json("/api/subscriptions/updates/validate", payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["violations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_refund_validate() {
    let (status, body) = send(post_json(
        "/api/refunds/validate",
        json!({ "value": 10.5, "description": "Produto não entregue" }),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 10.5);

    let (status, body) = send(post_json("/api/refunds/validate", json!({ "value": 0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "O valor do estorno deve ser positivo");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let request = Request::builder()
        .uri("/api/accounts")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
