//! # credit-core
//!
//! Foundation crate for the credit redistribution buffer.
//! Defines frames, observation payloads, errors, config, traits, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod frame;
pub mod observation;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{BufferConfig, CreditConfig, ObservabilityConfig};
pub use errors::{CreditError, CreditResult};
pub use frame::Frame;
pub use observation::SensorObservation;
pub use traits::FrameSink;
