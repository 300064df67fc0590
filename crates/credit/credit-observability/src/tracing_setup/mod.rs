//! Global `tracing` subscriber setup.

pub mod spans;

use credit_core::config::ObservabilityConfig;
use credit_core::errors::{CreditError, CreditResult};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter from `RUST_LOG` if set and valid, otherwise from `config.log_level`.
pub fn build_filter(config: &ObservabilityConfig) -> CreditResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| CreditError::invalid("observability.log_level", e.to_string()))
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` if another subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> CreditResult<bool> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };
    Ok(installed.is_ok())
}
