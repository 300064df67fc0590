//! Default values for every configuration field.

// Buffer
pub const DEFAULT_CAPACITY: usize = 64;
pub const DEFAULT_DECAY: f64 = 0.95;
pub const DEFAULT_MIN_RETAIN: usize = 32;
/// Frames exactly this many steps behind an incoming reward receive full credit.
pub const DEFAULT_CAUSAL_LAG: usize = 4;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
