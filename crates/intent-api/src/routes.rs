//! # Routes
//!
//! Axum router configuration for the payment intent API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the main application router
///
/// Routes:
/// - POST /create-payment-intent - Create payment intent, returns client secret
/// - GET  /config - Stripe publishable key
/// - GET  /health - Health check
/// - Anything else is served from the static directory (GET / → index.html)
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/create-payment-intent", post(handlers::create_payment_intent))
        .route("/config", get(handlers::stripe_config))
        .route("/health", get(handlers::health))
        // Static checkout page
        .fallback_service(static_files)
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
