//! Frame-stepped simulation run state
//!
//! The engine is pure; this is the one stateful object, owned by the
//! per-frame driver (originally the animation loop, here the CLI's
//! `simulate` command). Each tick re-evaluates the closed-form position
//! at the accumulated elapsed time instead of integrating velocity, so
//! stepping accumulates no numeric error.

use nalgebra::Vector2;

use crate::kinematics::position_at;
use crate::params::LaunchParameters;

/// Lifecycle of a single launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationPhase {
    Idle,
    Running,
    Landed,
}

impl std::fmt::Display for SimulationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationPhase::Idle => write!(f, "idle"),
            SimulationPhase::Running => write!(f, "running"),
            SimulationPhase::Landed => write!(f, "landed"),
        }
    }
}

/// A projectile flight stepped one frame at a time
pub struct Simulation {
    params: LaunchParameters,
    phase: SimulationPhase,
    elapsed_s: f64,
}

impl Simulation {
    pub fn new(params: LaunchParameters) -> Self {
        Self {
            params,
            phase: SimulationPhase::Idle,
            elapsed_s: 0.0,
        }
    }

    pub fn phase(&self) -> SimulationPhase {
        self.phase
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed_s
    }

    pub fn params(&self) -> &LaunchParameters {
        &self.params
    }

    /// Position at the current elapsed time, y clamped to ground level
    pub fn position(&self) -> Vector2<f64> {
        match self.phase {
            SimulationPhase::Idle => Vector2::new(0.0, self.params.initial_height),
            _ => {
                let p = position_at(&self.params, self.elapsed_s);
                Vector2::new(p.x, p.y.max(0.0))
            }
        }
    }

    /// Begin a flight
    ///
    /// A launch request while already running is silently ignored, as in
    /// the original simulators. From `Landed` this starts a fresh flight.
    pub fn launch(&mut self) {
        if self.phase == SimulationPhase::Running {
            return;
        }
        self.phase = SimulationPhase::Running;
        self.elapsed_s = 0.0;
    }

    /// Advance the flight by `dt` seconds and return the new position
    ///
    /// While running, transitions to `Landed` on the first tick where the
    /// computed height reaches or crosses zero; the returned position is
    /// clamped to y = 0 rather than left underground. Outside `Running`,
    /// or for a non-positive `dt`, this changes nothing and reports the
    /// current position.
    pub fn tick(&mut self, dt: f64) -> Vector2<f64> {
        if self.phase != SimulationPhase::Running || dt <= 0.0 {
            return self.position();
        }

        self.elapsed_s += dt;
        let p = position_at(&self.params, self.elapsed_s);

        if p.y <= 0.0 {
            self.phase = SimulationPhase::Landed;
            return Vector2::new(p.x, 0.0);
        }

        p
    }

    /// Abort or clear the flight and return to `Idle`
    pub fn reset(&mut self) {
        self.phase = SimulationPhase::Idle;
        self.elapsed_s = 0.0;
    }
}
