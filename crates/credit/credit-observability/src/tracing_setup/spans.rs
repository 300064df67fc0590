//! Span definitions per operation: ingest, flush.

/// Create an ingest span (one control-loop tick).
#[macro_export]
macro_rules! ingest_span {
    ($episode:expr) => {
        tracing::trace_span!("credit.ingest", episode = $episode)
    };
}

/// Create a flush span (end of episode).
#[macro_export]
macro_rules! flush_span {
    ($episode:expr, $resident:expr) => {
        tracing::info_span!("credit.flush", episode = $episode, resident = $resident)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INGEST: &str = "credit.ingest";
    pub const FLUSH: &str = "credit.flush";
}
