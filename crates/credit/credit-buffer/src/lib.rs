//! # credit-buffer
//!
//! Online credit assignment over a bounded window of frames.
//!
//! A reward arriving with frame N is diffused backward onto the frames still
//! inside the pending horizon, weighted by `decay^|i - lag|`. Frames that fall
//! out of the horizon are finalized and handed to a consumer in submission
//! order.

pub mod buffer;
pub mod drain;
pub mod kernel;
pub mod pipeline;
pub mod sink;
pub mod stats;

pub use buffer::{CreditBuffer, SubmitOutcome};
pub use drain::{Drain, FlushAll};
pub use kernel::DEFAULT_CAUSAL_LAG;
pub use pipeline::CreditPipeline;
pub use sink::{ChannelSink, VecSink};
pub use stats::BufferStats;
