//! Pricing engine for a tiffin (meal subscription) service.
//!
//! The core is [`pricing::compute_final_amount`], a pure calculation over a
//! base price, add-ons, weekly customizations, delivery and discount. Seller
//! and tiffin records live in [`models`] and are read through
//! [`models::TiffinLookup`].

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;

pub use config::PricingConfig;
pub use error::{AppError, Result};

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Output goes to stderr so JSON
/// on stdout stays clean.
pub fn init_tracing(config: &PricingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
