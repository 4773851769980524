//! # Projectile Kinematics
//!
//! Closed-form projectile motion engine behind a pair of educational
//! simulators: one planar (launch at an angle) and one vertical
//! (straight-up throw). The crate computes flight statistics, samples
//! the flight path for visualization, and steps a small Idle → Running
//! → Landed run-state machine one frame at a time.
//!
//! All physics is evaluated from the kinematic equations at an explicit
//! elapsed time; nothing is integrated, so there is no step-size error
//! to manage.

// Re-export the main types and functions
pub use params::{LaunchParameters, MotionModel};
pub use sampling::{sample_trajectory, sample_trajectory_default, TrajectorySample};
pub use simulation::{Simulation, SimulationPhase};
pub use solver::{FlightReport, FlightSolver, FlightStatistics, KinematicsError};

// Module declarations
pub mod constants;
pub mod kinematics;
pub mod params;
pub mod sampling;
pub mod simulation;
pub mod solver;
