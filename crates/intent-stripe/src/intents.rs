//! # Stripe PaymentIntents
//!
//! Implementation of the Stripe PaymentIntents API.
//! One form-encoded POST per charge; the client secret of the created
//! intent is what the browser needs to finish the payment.

use crate::config::StripeConfig;
use async_trait::async_trait;
use intent_core::{ChargeRequest, PaymentError, PaymentIntent, PaymentProcessor, PaymentResult};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Request timeout matching Stripe's own client libraries
const REQUEST_TIMEOUT: Duration = Duration::from_secs(80);

/// Stripe PaymentIntents processor
pub struct StripeIntentProcessor {
    config: StripeConfig,
    client: Client,
}

impl StripeIntentProcessor {
    /// Create a new Stripe processor
    pub fn new(config: StripeConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Form body for `POST /v1/payment_intents`
    fn form_params(charge: &ChargeRequest) -> Vec<(&'static str, String)> {
        vec![
            ("amount", charge.amount().to_string()),
            ("currency", charge.currency().as_str().to_string()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
        ]
    }
}

#[async_trait]
impl PaymentProcessor for StripeIntentProcessor {
    #[instrument(skip(self, charge), fields(amount = charge.amount()))]
    async fn create_intent(&self, charge: &ChargeRequest) -> PaymentResult<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        debug!("Creating Stripe payment intent: {}", charge.display());

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&Self::form_params(charge))
            .send()
            .await
            .map_err(|e| PaymentError::processor(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::processor(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Relay Stripe's own message when the body carries one
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(PaymentError::Processor(error_response.error.message));
            }

            return Err(PaymentError::processor(format!("HTTP {}: {}", status, body)));
        }

        let intent: StripePaymentIntentResponse = serde_json::from_str(&body).map_err(|e| {
            PaymentError::processor(format!("Failed to parse Stripe response: {}", e))
        })?;

        info!(
            "Created Stripe payment intent: id={}, status={}",
            intent.id,
            intent.status.as_deref().unwrap_or("unknown")
        );

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripePaymentIntentResponse {
    id: String,
    client_secret: String,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}
