//! Integration tests for the payment intent HTTP surface.
//!
//! The router is driven in-process with `oneshot`, backed by a stub
//! processor that counts calls, so no network access is needed.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use intent_api::{create_router, AppConfig, AppState};
use intent_core::{ChargeRequest, PaymentError, PaymentIntent, PaymentProcessor, PaymentResult};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Stub processor returning a canned outcome and recording every charge
struct StubProcessor {
    outcome: PaymentResult<PaymentIntent>,
    charges: Mutex<Vec<ChargeRequest>>,
}

impl StubProcessor {
    fn succeeding(client_secret: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(PaymentIntent {
                id: "pi_test".to_string(),
                client_secret: client_secret.to_string(),
            }),
            charges: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(PaymentError::processor(message)),
            charges: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<ChargeRequest> {
        self.charges.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProcessor for StubProcessor {
    async fn create_intent(&self, charge: &ChargeRequest) -> PaymentResult<PaymentIntent> {
        self.charges.lock().unwrap().push(charge.clone());
        self.outcome.clone()
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../../public").into(),
        ..AppConfig::default()
    }
}

fn app_with(processor: Arc<StubProcessor>) -> Router {
    create_router(AppState::with_processor(test_config(), processor))
}

/// Helper to build a JSON POST to the payment intent endpoint.
fn intent_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/create-payment-intent")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn invalid_amount_body() -> serde_json::Value {
    serde_json::json!({ "error": { "message": "Invalid amount provided." } })
}

#[tokio::test]
async fn test_amount_below_minimum_is_rejected() {
    let processor = StubProcessor::succeeding("secret_abc");
    let (status, body) = send(app_with(processor.clone()), intent_request(r#"{"amount": 49}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_amount_body());
    assert!(processor.calls().is_empty());
}

#[tokio::test]
async fn test_missing_zero_negative_and_null_amounts_are_rejected() {
    let processor = StubProcessor::succeeding("secret_abc");
    let app = app_with(processor.clone());

    for raw in [
        r#"{}"#,
        r#"{"amount": null}"#,
        r#"{"amount": 0}"#,
        r#"{"amount": -100}"#,
        r#"{"amount": 1}"#,
    ] {
        let (status, body) = send(app.clone(), intent_request(raw)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {} should be rejected", raw);
        assert_eq!(body, invalid_amount_body());
    }

    assert!(processor.calls().is_empty());
}

#[tokio::test]
async fn test_unreadable_bodies_are_invalid_amounts() {
    let processor = StubProcessor::succeeding("secret_abc");
    let app = app_with(processor.clone());

    for raw in [
        r#"{"amount": "1000"}"#,
        r#"{"amount": 10.5}"#,
        r#"not json"#,
        r#""#,
    ] {
        let (status, body) = send(app.clone(), intent_request(raw)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?} should be rejected", raw);
        assert_eq!(body, invalid_amount_body());
    }

    // No JSON content type at all
    let request = Request::builder()
        .method(Method::POST)
        .uri("/create-payment-intent")
        .body(Body::from(r#"{"amount": 1000}"#))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_amount_body());

    assert!(processor.calls().is_empty());
}

#[tokio::test]
async fn test_valid_amount_returns_client_secret() {
    let processor = StubProcessor::succeeding("secret_abc");
    let (status, body) =
        send(app_with(processor.clone()), intent_request(r#"{"amount": 1000}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "clientSecret": "secret_abc" }));

    let calls = processor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].amount(), 1000);
}

#[tokio::test]
async fn test_whole_number_in_float_form_is_accepted() {
    let processor = StubProcessor::succeeding("secret_abc");
    let app = app_with(processor.clone());

    for raw in [r#"{"amount": 1000.0}"#, r#"{"amount": 1e3}"#] {
        let (status, body) = send(app.clone(), intent_request(raw)).await;
        assert_eq!(status, StatusCode::OK, "body {} should be accepted", raw);
        assert_eq!(body, serde_json::json!({ "clientSecret": "secret_abc" }));
    }

    let calls = processor.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|charge| charge.amount() == 1000));
}

#[tokio::test]
async fn test_fractional_and_out_of_range_amounts_are_rejected() {
    let processor = StubProcessor::succeeding("secret_abc");
    let app = app_with(processor.clone());

    for raw in [
        r#"{"amount": 1000.5}"#,
        r#"{"amount": 49.0}"#,
        r#"{"amount": 1e30}"#,
        r#"{"amount": 18446744073709551615}"#,
    ] {
        let (status, body) = send(app.clone(), intent_request(raw)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {} should be rejected", raw);
        assert_eq!(body, invalid_amount_body());
    }

    assert!(processor.calls().is_empty());
}

#[tokio::test]
async fn test_minimum_amount_is_accepted() {
    let processor = StubProcessor::succeeding("secret_min");
    let (status, body) = send(app_with(processor.clone()), intent_request(r#"{"amount": 50}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientSecret"], "secret_min");
    assert_eq!(processor.calls().len(), 1);
}

#[tokio::test]
async fn test_currency_is_always_usd() {
    let processor = StubProcessor::succeeding("secret_abc");
    let (status, _) = send(
        app_with(processor.clone()),
        intent_request(r#"{"amount": 2500, "currency": "eur"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(processor.calls()[0].currency().as_str(), "usd");
}

#[tokio::test]
async fn test_processor_failure_maps_to_500_with_message() {
    let processor = StubProcessor::failing("card declined");
    let (status, body) =
        send(app_with(processor.clone()), intent_request(r#"{"amount": 1000}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": { "message": "card declined" } }));
    assert_eq!(processor.calls().len(), 1);
}

#[tokio::test]
async fn test_failure_does_not_affect_later_requests() {
    let failing = app_with(StubProcessor::failing("rate limited"));
    let (status, _) = send(failing, intent_request(r#"{"amount": 1000}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let processor = StubProcessor::succeeding("secret_next");
    let app = app_with(processor.clone());
    let (status, _) = send(app.clone(), intent_request(r#"{"amount": 10}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, body) = send(app, intent_request(r#"{"amount": 1000}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientSecret"], "secret_next");
}

#[tokio::test]
async fn test_root_serves_homepage() {
    let app = app_with(StubProcessor::failing("unused"));
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "got {}", content_type);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("/create-payment-intent"));
}

#[tokio::test]
async fn test_health() {
    let app = app_with(StubProcessor::succeeding("unused"));
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_config_endpoint() {
    let processor = StubProcessor::succeeding("unused");
    let config_request = || Request::builder().uri("/config").body(Body::empty()).unwrap();

    let (status, body) = send(app_with(processor.clone()), config_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Publishable key not configured.");

    let state = AppState::with_processor(test_config(), processor)
        .with_publishable_key(Some("pk_test_xyz".to_string()));
    let (status, body) = send(create_router(state), config_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "publishableKey": "pk_test_xyz" }));
}
