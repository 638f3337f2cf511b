//! # Application State
//!
//! Shared state for the Axum application.
//! Configuration is read once at startup and handed to handlers from here.

use anyhow::Context;
use intent_core::{BoxedPaymentProcessor, PaymentIntentGateway};
use intent_stripe::StripeIntentProcessor;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory holding index.html and other static assets
    pub static_dir: PathBuf,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    pub const DEFAULT_PORT: u16 = 4242;

    /// Load from environment variables (and `.env`, if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", port))?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: Self::DEFAULT_PORT,
            static_dir: PathBuf::from("public"),
            environment: "development".to_string(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Validate-and-forward front for the payment processor
    pub gateway: PaymentIntentGateway,
    /// Stripe publishable key served to the browser, if configured
    pub publishable_key: Option<Arc<str>>,
    /// Application config
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState backed by Stripe, configured from the environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let stripe = StripeIntentProcessor::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;
        let publishable_key = stripe.config().publishable_key.clone();

        info!(
            "Stripe mode: {}",
            if stripe.config().is_test_mode() { "test" } else { "live" }
        );

        Ok(Self::with_processor(config, Arc::new(stripe)).with_publishable_key(publishable_key))
    }

    /// Build state around any processor (used by tests with stub processors)
    pub fn with_processor(config: AppConfig, processor: BoxedPaymentProcessor) -> Self {
        Self {
            gateway: PaymentIntentGateway::new(processor),
            publishable_key: None,
            config: Arc::new(config),
        }
    }

    /// Builder: set the publishable key exposed at `/config`
    pub fn with_publishable_key(mut self, key: Option<String>) -> Self {
        self.publishable_key = key.map(Arc::from);
        self
    }
}
