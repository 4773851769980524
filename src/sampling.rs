use crate::constants::{DEFAULT_SAMPLE_STEPS, GROUND_TOLERANCE_M};
use crate::kinematics::{flight_time, position_at, velocity_at};
use crate::params::LaunchParameters;

/// Single trajectory sample point
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
    pub speed_mps: f64,
}

/// Sample the flight path at `step_count + 1` evenly spaced times over
/// `[0, flight_time]`, both endpoints included
///
/// Points below `-ground_tolerance` are dropped; the closed-form grid
/// can place a sample fractionally underground near touchdown. Output is
/// a pure function of the inputs, so resampling with the same parameters
/// yields the same sequence.
pub fn sample_trajectory(
    params: &LaunchParameters,
    step_count: usize,
    ground_tolerance: f64,
) -> Vec<TrajectorySample> {
    if step_count == 0 {
        return Vec::new();
    }

    let t_flight = flight_time(params);
    if t_flight <= 0.0 {
        return Vec::new();
    }

    let mut samples = Vec::with_capacity(step_count + 1);
    for i in 0..=step_count {
        let t = (i as f64 / step_count as f64) * t_flight;
        let position = position_at(params, t);

        if position.y >= -ground_tolerance {
            samples.push(TrajectorySample {
                time_s: t,
                x_m: position.x,
                y_m: position.y,
                speed_mps: velocity_at(params, t).norm(),
            });
        }
    }

    samples
}

/// `sample_trajectory` with the default step count and ground tolerance
pub fn sample_trajectory_default(params: &LaunchParameters) -> Vec<TrajectorySample> {
    sample_trajectory(params, DEFAULT_SAMPLE_STEPS, GROUND_TOLERANCE_M)
}
