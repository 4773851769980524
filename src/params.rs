use crate::constants::STANDARD_GRAVITY_MPS2;

/// Which motion components the simulator models
///
/// `Vertical` is the straight-up throw: it collapses the planar formulas
/// exactly (sin θ = 1, cos θ = 0) so both simulators share one code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionModel {
    /// Full 2D launch at an angle above the horizontal
    Planar,
    /// Straight-up throw; horizontal position is identically zero
    Vertical,
}

impl MotionModel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "planar" | "2d" => Some(MotionModel::Planar),
            "vertical" | "1d" => Some(MotionModel::Vertical),
            _ => None,
        }
    }
}

impl std::fmt::Display for MotionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotionModel::Planar => write!(f, "planar"),
            MotionModel::Vertical => write!(f, "vertical"),
        }
    }
}

/// Launch parameters for a projectile flight
///
/// Owned by the caller (sliders in the original front-end); the engine
/// only ever reads them. Gravity must be positive: the closed-form
/// flight time is undefined otherwise. The free functions do not
/// validate this precondition. `FlightSolver::solve` does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    pub speed: f64,          // m/s, >= 0
    pub angle_deg: f64,      // degrees above horizontal, [0, 90]; ignored for Vertical
    pub gravity: f64,        // m/s², > 0
    pub initial_height: f64, // meters, >= 0
    pub model: MotionModel,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        // Slider defaults from the simulators
        Self {
            speed: 20.0,
            angle_deg: 45.0,
            gravity: STANDARD_GRAVITY_MPS2,
            initial_height: 0.0,
            model: MotionModel::Planar,
        }
    }
}

impl LaunchParameters {
    /// Vertical-throw parameters (the 1D simulator's configuration)
    pub fn vertical(speed: f64, gravity: f64, initial_height: f64) -> Self {
        Self {
            speed,
            angle_deg: 90.0,
            gravity,
            initial_height,
            model: MotionModel::Vertical,
        }
    }

    /// sin of the effective launch angle; 1 for vertical motion
    pub(crate) fn sin_angle(&self) -> f64 {
        match self.model {
            MotionModel::Planar => self.angle_deg.to_radians().sin(),
            MotionModel::Vertical => 1.0,
        }
    }

    /// cos of the effective launch angle; 0 for vertical motion
    pub(crate) fn cos_angle(&self) -> f64 {
        match self.model {
            MotionModel::Planar => self.angle_deg.to_radians().cos(),
            MotionModel::Vertical => 0.0,
        }
    }
}
