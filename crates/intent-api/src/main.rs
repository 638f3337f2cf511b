//! # Intent Gateway
//!
//! Serves the checkout page and creates Stripe payment intents.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STRIPE_PUBLISHABLE_KEY=pk_test_...   # optional, for the bundled page
//! export PORT=4242                            # optional
//!
//! # Run the server
//! intent-gateway
//! ```

use intent_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.gateway.provider_name());
    info!("Static files: {}", state.config.static_dir.display());

    if state.publishable_key.is_none() {
        info!("STRIPE_PUBLISHABLE_KEY not set, /config will return 404");
    }

    let is_prod = state.config.is_production();
    let app = routes::create_router(state);

    info!("Intent gateway listening on http://{}", addr);

    if !is_prod {
        info!("Checkout page: http://{}/", addr);
        info!("Payment intents: POST http://{}/create-payment-intent", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Intent Gateway
  ━━━━━━━━━━━━━━━━━━━━━━━
  Stripe PaymentIntents backend
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
