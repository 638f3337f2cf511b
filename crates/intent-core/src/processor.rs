//! # Payment Processor Trait
//!
//! The one capability the gateway needs from an external processor:
//! create a payment intent for a validated charge.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 PaymentProcessor (trait)                    │
//! │  ├── create_intent()                                        │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                  ┌─────────┴─────────┐
//!          ┌───────┴───────┐   ┌───────┴───────┐
//!          │ StripeIntent  │   │  test stubs   │
//!          │   Processor   │   │               │
//!          └───────────────┘   └───────────────┘
//! ```

use crate::charge::{ChargeRequest, PaymentIntent};
use crate::error::PaymentResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment processor implementations.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create a payment intent for `charge` with automatic payment
    /// methods enabled.
    ///
    /// Exactly one request is made; failures of any kind come back as
    /// [`PaymentError::Processor`](crate::PaymentError::Processor).
    async fn create_intent(&self, charge: &ChargeRequest) -> PaymentResult<PaymentIntent>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment processor (dynamic dispatch)
pub type BoxedPaymentProcessor = Arc<dyn PaymentProcessor>;
