//! # Charge Types
//!
//! The validated charge a caller asks for and the intent the processor
//! hands back for it.

use crate::error::{PaymentError, PaymentResult};

/// Smallest amount (in minor units) the gateway forwards to a processor.
pub const MINIMUM_CHARGE_AMOUNT: i64 = 50;

/// Supported currencies (ISO 4217).
///
/// Only one currency is accepted; every charge is billed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    Usd,
}

impl Currency {
    /// Returns the lowercase ISO 4217 code processors expect
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// A validated request to charge `amount` minor units.
///
/// Can only be built through [`ChargeRequest::new`], so holding one means
/// the amount already cleared [`MINIMUM_CHARGE_AMOUNT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    amount: i64,
    currency: Currency,
}

impl ChargeRequest {
    /// Validate a caller-supplied amount.
    ///
    /// Missing, zero, negative and sub-minimum amounts are all rejected
    /// with [`PaymentError::InvalidAmount`].
    pub fn new(amount: Option<i64>) -> PaymentResult<Self> {
        match amount {
            Some(amount) if amount >= MINIMUM_CHARGE_AMOUNT => Ok(Self {
                amount,
                currency: Currency::default(),
            }),
            _ => Err(PaymentError::InvalidAmount),
        }
    }

    /// Amount in the smallest currency unit (cents for USD)
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Format for display (e.g., "$10.00 USD")
    pub fn display(&self) -> String {
        format!(
            "${}.{:02} {}",
            self.amount / 100,
            self.amount % 100,
            self.currency
        )
    }
}

/// The part of a processor-side payment intent the gateway reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    /// Processor identifier (pi_...)
    pub id: String,
    /// Opaque token the browser uses to confirm the payment
    pub client_secret: String,
}
