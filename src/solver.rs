use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::constants::{DEFAULT_SAMPLE_STEPS, GROUND_TOLERANCE_M};
use crate::kinematics::{flight_time, impact_speed, max_height, range};
use crate::params::LaunchParameters;
use crate::sampling::{sample_trajectory, TrajectorySample};

/// Error type for kinematics operations
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Gravity must be strictly positive; the closed-form flight time is
    /// undefined otherwise
    InvalidGravity(f64),
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KinematicsError::InvalidGravity(g) => {
                write!(f, "gravity must be positive, got {g} m/s²")
            }
        }
    }
}

impl Error for KinematicsError {}

/// Derived flight statistics
///
/// Always a pure function of the launch parameters. Recompute whenever a
/// parameter changes rather than caching across mutations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightStatistics {
    pub max_height_m: f64,
    /// `None` for a vertical throw, which has no horizontal range
    pub flight_range_m: Option<f64>,
    pub flight_time_s: f64,
    pub impact_speed_mps: f64,
}

impl FlightStatistics {
    pub fn compute(params: &LaunchParameters) -> Result<Self, KinematicsError> {
        if params.gravity <= 0.0 {
            return Err(KinematicsError::InvalidGravity(params.gravity));
        }
        Ok(Self {
            max_height_m: max_height(params),
            flight_range_m: range(params),
            flight_time_s: flight_time(params),
            impact_speed_mps: impact_speed(params),
        })
    }
}

/// Complete flight report: statistics plus the sampled path
#[derive(Debug, Clone, Serialize)]
pub struct FlightReport {
    pub statistics: FlightStatistics,
    pub samples: Vec<TrajectorySample>,
}

/// Computes a full flight report for a set of launch parameters
///
/// Thin stateful wrapper over the pure kinematics functions, holding the
/// sampling configuration the way the front-end holds its display
/// settings.
pub struct FlightSolver {
    params: LaunchParameters,
    step_count: usize,
    ground_tolerance: f64,
}

impl FlightSolver {
    pub fn new(params: LaunchParameters) -> Self {
        Self {
            params,
            step_count: DEFAULT_SAMPLE_STEPS,
            ground_tolerance: GROUND_TOLERANCE_M,
        }
    }

    pub fn set_step_count(&mut self, step_count: usize) {
        self.step_count = step_count;
    }

    pub fn set_ground_tolerance(&mut self, tolerance: f64) {
        self.ground_tolerance = tolerance;
    }

    pub fn params(&self) -> &LaunchParameters {
        &self.params
    }

    pub fn solve(&self) -> Result<FlightReport, KinematicsError> {
        let statistics = FlightStatistics::compute(&self.params)?;
        let samples = sample_trajectory(&self.params, self.step_count, self.ground_tolerance);
        Ok(FlightReport {
            statistics,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_default_launch() {
        let report = FlightSolver::new(LaunchParameters::default())
            .solve()
            .unwrap();

        assert!((report.statistics.flight_time_s - 2.887).abs() < 0.01);
        assert!((report.statistics.max_height_m - 10.20).abs() < 0.01);
        assert!((report.statistics.flight_range_m.unwrap() - 40.82).abs() < 0.01);
        assert!((report.statistics.impact_speed_mps - 20.0).abs() < 0.01);
        assert_eq!(report.samples.len(), DEFAULT_SAMPLE_STEPS + 1);
    }

    #[test]
    fn test_solve_vertical_has_no_range() {
        let report = FlightSolver::new(LaunchParameters::vertical(20.0, 9.8, 0.0))
            .solve()
            .unwrap();
        assert_eq!(report.statistics.flight_range_m, None);
        assert!((report.statistics.flight_time_s - 4.08).abs() < 0.01);
    }

    #[test]
    fn test_invalid_gravity_is_reported() {
        let params = LaunchParameters {
            gravity: 0.0,
            ..Default::default()
        };
        let err = FlightSolver::new(params).solve().unwrap_err();
        assert_eq!(err, KinematicsError::InvalidGravity(0.0));
        assert!(err.to_string().contains("gravity"));
    }

    #[test]
    fn test_step_count_is_configurable() {
        let mut solver = FlightSolver::new(LaunchParameters::default());
        solver.set_step_count(10);
        let report = solver.solve().unwrap();
        assert_eq!(report.samples.len(), 11);
    }

    #[test]
    fn test_statistics_track_parameter_changes() {
        // Recompute-on-change: two parameter sets must never share stats
        let base = FlightStatistics::compute(&LaunchParameters::default()).unwrap();
        let faster = FlightStatistics::compute(&LaunchParameters {
            speed: 40.0,
            ..Default::default()
        })
        .unwrap();
        assert!(faster.flight_time_s > base.flight_time_s);
        assert!(faster.max_height_m > base.max_height_m);
    }
}
