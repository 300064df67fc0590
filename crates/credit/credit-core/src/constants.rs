/// Width of a sensor frame in pixels.
pub const IMAGE_WIDTH: usize = 200;

/// Height of a sensor frame in pixels.
pub const IMAGE_HEIGHT: usize = 60;

/// Channels per pixel.
pub const IMAGE_DEPTH: usize = 4;

/// Flattened length of a sensor frame.
pub const IMAGE_LEN: usize = IMAGE_WIDTH * IMAGE_HEIGHT * IMAGE_DEPTH;

/// Number of side-channel measurements recorded per tick.
pub const VARIABLE_COUNT: usize = 3;

/// Length of the steering (action/label) vector.
pub const STEERING_LEN: usize = 2;
