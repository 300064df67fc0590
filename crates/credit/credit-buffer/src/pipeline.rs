//! CreditPipeline: one buffer feeding one sink, tick by tick.

use credit_core::errors::CreditResult;
use credit_core::frame::Frame;
use credit_core::traits::FrameSink;
use credit_observability::{flush_span, ingest_span};
use tracing::{debug, info};

use crate::buffer::{CreditBuffer, SubmitOutcome};

/// Submits each tick's frame and forwards whatever became final.
///
/// If the sink fails, the error is returned immediately. Frames not yet
/// drained stay in the buffer, except during [`end_episode`](Self::end_episode),
/// which always leaves the buffer empty.
pub struct CreditPipeline<O, S> {
    buffer: CreditBuffer<O>,
    sink: S,
    episode: u64,
}

impl<O, S: FrameSink<O>> CreditPipeline<O, S> {
    pub fn new(buffer: CreditBuffer<O>, sink: S) -> Self {
        Self {
            buffer,
            sink,
            episode: 0,
        }
    }

    /// Submit one frame and deliver every frame it finalized.
    /// Returns the number delivered.
    pub fn ingest(&mut self, frame: Frame<O>) -> CreditResult<usize> {
        let _span = ingest_span!(self.episode).entered();
        if let SubmitOutcome::Terminal { discarded } = self.buffer.submit(frame) {
            debug!(episode = self.episode, discarded, "terminal frame");
        }
        let mut delivered = 0;
        for finalized in self.buffer.drain_finalized() {
            self.sink.accept(finalized)?;
            delivered += 1;
        }
        Ok(delivered)
    }

    /// Flush the buffer into the sink and start a new episode.
    /// Returns the number delivered by the flush.
    pub fn end_episode(&mut self) -> CreditResult<usize> {
        let _span = flush_span!(self.episode, self.buffer.len()).entered();
        let before = self.buffer.stats();
        let mut delivered = 0;
        let result: CreditResult<()> = self
            .buffer
            .flush_all()
            .try_for_each(|finalized| {
                self.sink.accept(finalized)?;
                delivered += 1;
                Ok(())
            });
        let after = self.buffer.stats();
        info!(
            episode = self.episode,
            delivered,
            dropped = after.discarded_on_flush - before.discarded_on_flush,
            "episode flushed"
        );
        self.episode += 1;
        result.map(|()| delivered)
    }

    /// Episodes completed so far.
    pub fn episode(&self) -> u64 {
        self.episode
    }

    pub fn buffer(&self) -> &CreditBuffer<O> {
        &self.buffer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (CreditBuffer<O>, S) {
        (self.buffer, self.sink)
    }
}
