//! # credit-observability
//!
//! Subscriber initialisation driven by [`ObservabilityConfig`] and the span
//! macros used around buffer operations.
//!
//! [`ObservabilityConfig`]: credit_core::ObservabilityConfig

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};
