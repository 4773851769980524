/// Physical and numerical constants used in kinematics calculations

/// Standard gravitational acceleration in m/s²
///
/// The simulators default to 9.8 rather than the full-precision 9.80665;
/// gravity is a user-adjustable parameter and this is only its default.
pub const STANDARD_GRAVITY_MPS2: f64 = 9.8;

/// Ground-penetration tolerance for trajectory sampling (meters)
///
/// Sampled points with y below −GROUND_TOLERANCE_M are discarded. The
/// closed-form time grid can place the final sample fractionally below
/// ground; this tolerance keeps that endpoint without admitting visibly
/// buried points.
pub const GROUND_TOLERANCE_M: f64 = 0.1;

/// Default number of intervals when sampling a trajectory for display
pub const DEFAULT_SAMPLE_STEPS: usize = 100;

/// Nominal frame step for the simulation driver, seconds (~60 fps)
pub const FRAME_STEP_S: f64 = 0.016;
