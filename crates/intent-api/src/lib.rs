//! # intent-api
//!
//! HTTP API layer for the payment intent gateway.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The payment intent endpoint
//! - Static hosting for the checkout page
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Checkout page (`index.html`) |
//! | POST | `/create-payment-intent` | Create payment intent |
//! | GET | `/config` | Stripe publishable key |
//! | GET | `/health` | Health check |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
