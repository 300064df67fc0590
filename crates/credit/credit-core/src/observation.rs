use serde::{Deserialize, Serialize};

use crate::constants::{IMAGE_LEN, STEERING_LEN, VARIABLE_COUNT};
use crate::errors::{CreditError, CreditResult};

/// Observation bundle produced by the driving control loop.
///
/// Ready-made payload for `Frame<SensorObservation>`. The buffer treats it
/// as opaque; producers can call [`SensorObservation::validate_shape`]
/// before submitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorObservation {
    /// Flattened width × height × depth image.
    pub image: Vec<f32>,
    /// Side-channel measurements.
    pub variables: Vec<f32>,
    /// Chosen steering action.
    pub steering: [f32; STEERING_LEN],
}

impl SensorObservation {
    pub fn new(image: Vec<f32>, variables: Vec<f32>, steering: [f32; STEERING_LEN]) -> Self {
        Self {
            image,
            variables,
            steering,
        }
    }

    /// All-zero observation with the expected dimensions.
    pub fn blank() -> Self {
        Self {
            image: vec![0.0; IMAGE_LEN],
            variables: vec![0.0; VARIABLE_COUNT],
            steering: [0.0; STEERING_LEN],
        }
    }

    /// Check that the image and variable vectors have the expected lengths.
    pub fn validate_shape(&self) -> CreditResult<()> {
        if self.image.len() != IMAGE_LEN {
            return Err(CreditError::ObservationShape {
                field: "image",
                expected: IMAGE_LEN,
                actual: self.image.len(),
            });
        }
        if self.variables.len() != VARIABLE_COUNT {
            return Err(CreditError::ObservationShape {
                field: "variables",
                expected: VARIABLE_COUNT,
                actual: self.variables.len(),
            });
        }
        Ok(())
    }
}
