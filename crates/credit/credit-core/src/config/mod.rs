pub mod buffer_config;
pub mod defaults;
pub mod observability_config;

pub use buffer_config::BufferConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::CreditResult;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditConfig {
    pub buffer: BufferConfig,
    pub observability: ObservabilityConfig,
}

impl CreditConfig {
    /// Parse from a TOML string and validate the buffer section.
    pub fn from_toml(toml_str: &str) -> CreditResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.buffer.validate()?;
        Ok(config)
    }
}
