use serde::{Deserialize, Serialize};

/// One timestep of observation plus a mutable reward accumulator.
///
/// The buffer never looks inside `observation`; only `reward` is read and
/// written. Once submitted, a frame is owned by the buffer until it is
/// yielded back or discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame<O> {
    /// Opaque payload carried through unchanged.
    pub observation: O,
    /// Reward signal on submission; received credit once stored.
    pub reward: f64,
}

impl<O> Frame<O> {
    pub fn new(observation: O, reward: f64) -> Self {
        Self {
            observation,
            reward,
        }
    }

    /// Whether this frame takes the terminal branch on submit.
    pub fn is_terminal(&self) -> bool {
        self.reward == 0.0
    }

    /// Split into payload and reward.
    pub fn into_parts(self) -> (O, f64) {
        (self.observation, self.reward)
    }
}
