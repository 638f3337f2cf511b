//! # intent-core
//!
//! Core types and traits for the payment intent gateway.
//!
//! This crate provides:
//! - `ChargeRequest` and `Currency` for validated charges
//! - `PaymentProcessor` trait for implementing payment providers
//! - `PaymentIntentGateway`, the validate-then-forward entry point
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use intent_core::PaymentIntentGateway;
//!
//! let gateway = PaymentIntentGateway::new(Arc::new(processor));
//!
//! // Amounts are in minor units; anything under 50 is rejected locally
//! let intent = gateway.create_payment_intent(Some(1000)).await?;
//!
//! // Hand intent.client_secret to the browser
//! ```

pub mod charge;
pub mod error;
pub mod gateway;
pub mod processor;

// Re-exports for convenience
pub use charge::{ChargeRequest, Currency, PaymentIntent, MINIMUM_CHARGE_AMOUNT};
pub use error::{PaymentError, PaymentResult};
pub use gateway::PaymentIntentGateway;
pub use processor::{BoxedPaymentProcessor, PaymentProcessor};
