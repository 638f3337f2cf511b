//! # Request Handlers
//!
//! Axum request handlers for the payment intent API.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use intent_core::PaymentError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create payment intent request
#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in minor currency units; `null` and absent are both `None`
    #[serde(default)]
    pub amount: Option<serde_json::Number>,
}

impl CreatePaymentIntentRequest {
    /// Amount as whole minor units.
    ///
    /// Whole numbers written in float form (`1000.0`, `1e3`) count as
    /// integers; fractional and out-of-range values yield `None`.
    pub fn minor_units(&self) -> Option<i64> {
        let number = self.amount.as_ref()?;
        if let Some(amount) = number.as_i64() {
            return Some(amount);
        }

        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    }
}

/// Create payment intent response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    /// Client secret the browser uses to confirm the payment
    pub client_secret: String,
}

/// Publishable key response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub publishable_key: String,
}

/// Error response: `{ "error": { "message": "..." } }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
            },
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn payment_error_to_response(err: PaymentError) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.to_string())))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "intent-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Publishable key for Stripe.js on the checkout page
pub async fn stripe_config(
    State(state): State<AppState>,
) -> Result<Json<ConfigResponse>, ApiError> {
    let key = state.publishable_key.as_deref().ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Publishable key not configured.")),
        )
    })?;

    Ok(Json(ConfigResponse {
        publishable_key: key.to_string(),
    }))
}

/// Create a payment intent and return its client secret.
///
/// A body that isn't `{ "amount": <number> }` with a whole-number amount is
/// treated the same as a missing amount.
#[instrument(skip(state, payload))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<CreatePaymentIntentRequest>, JsonRejection>,
) -> Result<Json<CreatePaymentIntentResponse>, ApiError> {
    let amount = match payload {
        Ok(Json(request)) => request.minor_units(),
        Err(rejection) => {
            debug!("Unreadable payment intent request: {}", rejection);
            None
        }
    };

    let intent = state
        .gateway
        .create_payment_intent(amount)
        .await
        .map_err(payment_error_to_response)?;

    Ok(Json(CreatePaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
