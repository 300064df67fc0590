use serde::{Deserialize, Serialize};

/// Lifetime counters for a buffer.
///
/// Every submitted frame ends up in exactly one of `delivered`,
/// `discarded_on_terminal`, `discarded_on_flush`, or is still resident.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferStats {
    /// Frames passed to `submit`.
    pub submitted: u64,
    /// Submits that took the terminal (zero reward) branch.
    pub terminal_submits: u64,
    /// Individual frame updates performed by credit diffusion.
    pub credited: u64,
    /// Pending frames evicted by a terminal submit.
    pub discarded_on_terminal: u64,
    /// Frames cleared at the end of a flush without being yielded.
    pub discarded_on_flush: u64,
    /// Frames handed to the consumer.
    pub delivered: u64,
}

impl BufferStats {
    /// Total frames dropped without delivery.
    pub fn discarded(&self) -> u64 {
        self.discarded_on_terminal + self.discarded_on_flush
    }

    /// Frames accounted for, given the number currently resident.
    pub fn accounted(&self, resident: usize) -> u64 {
        self.delivered + self.discarded() + resident as u64
    }
}
