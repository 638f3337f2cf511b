//! # Payment Intent Gateway
//!
//! Validates a requested amount and relays it to the configured processor.
//! Holds no state beyond the processor handle.

use crate::charge::{ChargeRequest, PaymentIntent};
use crate::error::PaymentResult;
use crate::processor::BoxedPaymentProcessor;
use tracing::{debug, error, info, instrument};

/// Stateless front for a [`PaymentProcessor`](crate::PaymentProcessor).
#[derive(Clone)]
pub struct PaymentIntentGateway {
    processor: BoxedPaymentProcessor,
}

impl PaymentIntentGateway {
    pub fn new(processor: BoxedPaymentProcessor) -> Self {
        Self { processor }
    }

    /// Name of the processor behind this gateway
    pub fn provider_name(&self) -> &'static str {
        self.processor.provider_name()
    }

    /// Validate `amount` and create a payment intent for it.
    ///
    /// Invalid amounts fail before the processor is contacted. Processor
    /// failures are returned as-is, without retry.
    #[instrument(skip(self), fields(provider = self.processor.provider_name()))]
    pub async fn create_payment_intent(&self, amount: Option<i64>) -> PaymentResult<PaymentIntent> {
        let charge = ChargeRequest::new(amount).inspect_err(|_| {
            debug!("Rejected charge amount: {:?}", amount);
        })?;

        info!("Creating payment intent: {}", charge.display());

        let intent = self
            .processor
            .create_intent(&charge)
            .await
            .inspect_err(|e| error!("Failed to create payment intent: {}", e))?;

        info!("Created payment intent: {}", intent.id);

        Ok(intent)
    }
}
