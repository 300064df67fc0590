//! Stock [`FrameSink`] implementations.

use std::sync::mpsc::Sender;

use credit_core::errors::{CreditError, CreditResult};
use credit_core::frame::Frame;
use credit_core::traits::FrameSink;

/// Collects frames in arrival order.
#[derive(Debug, Clone)]
pub struct VecSink<O> {
    frames: Vec<Frame<O>>,
}

impl<O> VecSink<O> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn frames(&self) -> &[Frame<O>] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Frame<O>> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl<O> Default for VecSink<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> FrameSink<O> for VecSink<O> {
    fn accept(&mut self, frame: Frame<O>) -> CreditResult<()> {
        self.frames.push(frame);
        Ok(())
    }
}

/// Forwards frames over an mpsc channel to a writer on another thread.
#[derive(Debug)]
pub struct ChannelSink<O> {
    sender: Sender<Frame<O>>,
    delivered: u64,
}

impl<O> ChannelSink<O> {
    pub fn new(sender: Sender<Frame<O>>) -> Self {
        Self {
            sender,
            delivered: 0,
        }
    }

    /// Frames successfully sent.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }
}

impl<O> FrameSink<O> for ChannelSink<O> {
    fn accept(&mut self, frame: Frame<O>) -> CreditResult<()> {
        self.sender
            .send(frame)
            .map_err(|_| CreditError::SinkClosed {
                delivered: self.delivered,
            })?;
        self.delivered += 1;
        Ok(())
    }
}
