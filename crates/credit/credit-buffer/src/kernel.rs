//! Decay kernel used to spread an incoming reward over pending frames.
//!
//! ```text
//! weight(i) = decay ^ |i - lag|
//! ```
//!
//! `i` is the window index (0 = newest stored frame). The frame `lag` steps
//! back gets the full reward; nearer and farther frames get exponentially less.

pub use credit_core::config::defaults::DEFAULT_CAUSAL_LAG;

/// Weight applied to the pending frame at `index`.
#[inline]
pub fn weight(decay: f64, lag: usize, index: usize) -> f64 {
    let distance = i32::try_from(index.abs_diff(lag)).unwrap_or(i32::MAX);
    decay.powi(distance)
}

/// Sum of weights over indices `0..touched`.
pub fn total_weight(decay: f64, lag: usize, touched: usize) -> f64 {
    (0..touched).map(|i| weight(decay, lag, i)).sum()
}

/// Geometric mass `Σ decay^i` for `i` in `0..length`.
///
/// Upper bound on the credit a single reward can contribute per unit when
/// the lag is 0; useful for normalising accumulated rewards downstream.
pub fn kernel_mass(decay: f64, length: usize) -> f64 {
    let mut sum = 0.0;
    let mut term = 1.0;
    for _ in 0..length {
        sum += term;
        term *= decay;
    }
    sum
}
