use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{CreditError, CreditResult};

/// Construction parameters for a credit buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Upper bound on the pending horizon.
    pub capacity: usize,
    /// Per-step decay of diffused credit, in (0, 1].
    pub decay: f64,
    /// Pending frames preserved across a flush event.
    pub min_retain: usize,
    /// Lag (in frames) that receives undecayed credit.
    pub causal_lag: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_CAPACITY,
            decay: defaults::DEFAULT_DECAY,
            min_retain: defaults::DEFAULT_MIN_RETAIN,
            causal_lag: defaults::DEFAULT_CAUSAL_LAG,
        }
    }
}

impl BufferConfig {
    pub fn new(capacity: usize, decay: f64, min_retain: usize) -> Self {
        Self {
            capacity,
            decay,
            min_retain,
            causal_lag: defaults::DEFAULT_CAUSAL_LAG,
        }
    }

    /// Reject degenerate configurations. Nothing is clamped.
    pub fn validate(&self) -> CreditResult<()> {
        if self.capacity == 0 {
            return Err(CreditError::invalid("capacity", "must be >= 1, got 0"));
        }
        // Written so that NaN fails too.
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(CreditError::invalid(
                "decay",
                format!("must be in (0, 1], got {}", self.decay),
            ));
        }
        Ok(())
    }

    /// Whether `min_retain` exceeds `capacity`. Allowed, but never useful:
    /// the pending horizon cannot grow past `capacity`.
    pub fn min_retain_exceeds_capacity(&self) -> bool {
        self.min_retain > self.capacity
    }
}
