/// Root error type for the credit buffer workspace.
///
/// Buffer operations themselves are total; every variant here comes from
/// construction, configuration loading, payload validation, or a consumer.
#[derive(Debug, thiserror::Error)]
pub enum CreditError {
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("config parse error: {message}")]
    ConfigParse { message: String },

    #[error("observation field `{field}` has length {actual}, expected {expected}")]
    ObservationShape {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("frame sink closed after {delivered} frames")]
    SinkClosed { delivered: u64 },
}

impl CreditError {
    /// Shorthand for an [`CreditError::InvalidConfiguration`].
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for CreditError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse {
            message: err.to_string(),
        }
    }
}
