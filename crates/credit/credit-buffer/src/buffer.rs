use std::collections::VecDeque;

use credit_core::config::BufferConfig;
use credit_core::errors::CreditResult;
use credit_core::frame::Frame;
use tracing::{debug, trace, warn};

use crate::drain::{Drain, FlushAll};
use crate::kernel;
use crate::stats::BufferStats;

/// Which branch a submit took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nonzero reward: `credited` pending frames received a share of it.
    Continued { credited: usize },
    /// Zero reward: `discarded` pending frames were evicted from the front
    /// and the pending horizon reset to the new frame alone.
    Terminal { discarded: usize },
}

/// Bounded window that redistributes incoming rewards onto preceding frames.
///
/// The window is newest-first: index 0 is the most recently submitted frame.
/// The first `pending_count` frames are still open for credit; everything
/// behind them is finalized and waits to be drained from the back.
///
/// Not internally synchronised. One producer calls [`submit`](Self::submit)
/// in frame order; one consumer drains.
#[derive(Debug)]
pub struct CreditBuffer<O> {
    window: VecDeque<Frame<O>>,
    capacity: usize,
    decay: f64,
    min_retain: usize,
    causal_lag: usize,
    pending: usize,
    stats: BufferStats,
}

impl<O> CreditBuffer<O> {
    /// Create a buffer, rejecting `capacity == 0` and `decay` outside (0, 1].
    pub fn new(capacity: usize, decay: f64, min_retain: usize) -> CreditResult<Self> {
        Self::from_config(&BufferConfig::new(capacity, decay, min_retain))
    }

    /// Create a buffer from a validated [`BufferConfig`].
    pub fn from_config(config: &BufferConfig) -> CreditResult<Self> {
        config.validate()?;
        if config.min_retain_exceeds_capacity() {
            warn!(
                capacity = config.capacity,
                min_retain = config.min_retain,
                "min_retain exceeds capacity; flushes will retain at most capacity frames"
            );
        }
        Ok(Self {
            window: VecDeque::new(),
            capacity: config.capacity,
            decay: config.decay,
            min_retain: config.min_retain,
            causal_lag: config.causal_lag,
            pending: 0,
            stats: BufferStats::default(),
        })
    }

    /// Override the lag that receives undecayed credit.
    pub fn with_causal_lag(mut self, causal_lag: usize) -> Self {
        self.causal_lag = causal_lag;
        self
    }

    /// Ingest one frame, diffusing its reward backward first.
    pub fn submit(&mut self, mut frame: Frame<O>) -> SubmitOutcome {
        self.stats.submitted += 1;
        let reward = frame.reward;
        if !reward.is_finite() {
            warn!(reward, "non-finite reward submitted; pending credit will be poisoned");
        }

        if frame.is_terminal() {
            let discarded = self.min_retain.min(self.pending);
            for _ in 0..discarded {
                self.window.pop_front();
            }
            self.window.push_front(frame);
            self.pending = 1;

            self.stats.terminal_submits += 1;
            self.stats.discarded_on_terminal += discarded as u64;
            debug!(discarded, resident = self.window.len(), "terminal frame reset pending horizon");
            return SubmitOutcome::Terminal { discarded };
        }

        // Finalized frames sit at index >= pending and are never touched.
        let credited = self.pending.min(self.window.len());
        for (i, pending) in self.window.iter_mut().take(credited).enumerate() {
            pending.reward += kernel::weight(self.decay, self.causal_lag, i) * reward;
        }

        frame.reward = 0.0;
        self.window.push_front(frame);
        self.pending = (self.pending + 1).min(self.capacity);

        self.stats.credited += credited as u64;
        trace!(reward, credited, pending = self.pending, "frame submitted");
        SubmitOutcome::Continued { credited }
    }

    /// Remove and return the oldest finalized frame, if any.
    pub fn pop_finalized(&mut self) -> Option<Frame<O>> {
        if self.window.len() <= self.pending {
            return None;
        }
        let frame = self.window.pop_back()?;
        self.stats.delivered += 1;
        Some(frame)
    }

    /// Lazily yield every finalized frame, oldest first.
    ///
    /// Dropping the iterator early leaves the remaining frames in place.
    pub fn drain_finalized(&mut self) -> Drain<'_, O> {
        Drain::new(self)
    }

    /// End the episode: shrink the horizon to `min_retain`, yield every
    /// frame that is now finalized, then empty the buffer.
    ///
    /// The buffer is emptied when the returned iterator is dropped, whether
    /// or not it was run to completion.
    pub fn flush_all(&mut self) -> FlushAll<'_, O> {
        self.pending = self.pending.min(self.min_retain);
        debug!(
            pending = self.pending,
            finalized = self.pending_unresolved_count(),
            "flushing buffer"
        );
        FlushAll::new(self)
    }

    /// Finalized frames still resident.
    pub fn pending_unresolved_count(&self) -> usize {
        self.window.len() - self.pending
    }

    /// Drop everything and reset the horizon. Used by [`FlushAll`].
    pub(crate) fn clear(&mut self) {
        let dropped = self.window.len();
        self.window.clear();
        self.pending = 0;
        self.stats.discarded_on_flush += dropped as u64;
    }

    /// Frames currently resident, pending and finalized.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Size of the pending horizon.
    pub fn pending_count(&self) -> usize {
        self.pending
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn min_retain(&self) -> usize {
        self.min_retain
    }

    pub fn causal_lag(&self) -> usize {
        self.causal_lag
    }

    pub fn stats(&self) -> BufferStats {
        self.stats
    }

    /// Resident frames, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Frame<O>> + '_ {
        self.window.iter()
    }

    /// `Σ decay^i` over the buffer's capacity.
    pub fn kernel_mass(&self) -> f64 {
        kernel::kernel_mass(self.decay, self.capacity)
    }
}
