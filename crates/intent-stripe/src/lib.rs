//! # intent-stripe
//!
//! Stripe processor for the payment intent gateway.
//!
//! **StripeIntentProcessor** creates PaymentIntents with automatic payment
//! methods enabled and returns the intent's client secret, which the
//! browser passes to Stripe.js to confirm the payment.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intent_stripe::StripeIntentProcessor;
//! use intent_core::{ChargeRequest, PaymentProcessor};
//!
//! // Create processor from environment
//! let processor = StripeIntentProcessor::from_env()?;
//!
//! // Create a $10.00 payment intent
//! let charge = ChargeRequest::new(Some(1000))?;
//! let intent = processor.create_intent(&charge).await?;
//!
//! // Send intent.client_secret to the browser
//! ```

pub mod config;
pub mod intents;

// Re-exports
pub use config::StripeConfig;
pub use intents::StripeIntentProcessor;
