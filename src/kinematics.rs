//! Closed-form projectile kinematics
//!
//! Every function here is a pure function of the launch parameters (and,
//! where relevant, an elapsed time): no hidden state, no accumulation.
//! The per-frame driver in `simulation` re-evaluates `position_at` each
//! tick rather than integrating, so there is no drift to control.
//!
//! Precondition for all functions: `params.gravity > 0`. The closed-form
//! flight time divides by gravity; with `g <= 0` the functions return
//! 0.0 (or the rest position) instead of panicking, and callers that
//! need a hard failure should go through `FlightSolver::solve`.

use nalgebra::Vector2;

use crate::params::LaunchParameters;

/// Total flight time until the projectile returns to ground level
///
/// `t = (v·sinθ + √((v·sinθ)² + 2·g·h)) / g`. Zero speed with zero
/// height gives 0; zero speed with positive height gives the free-fall
/// time `√(2h/g)`.
pub fn flight_time(params: &LaunchParameters) -> f64 {
    if params.gravity <= 0.0 {
        return 0.0;
    }
    let v_up = params.speed * params.sin_angle();
    (v_up + (v_up * v_up + 2.0 * params.gravity * params.initial_height).sqrt()) / params.gravity
}

/// Time at which the projectile reaches its apex
pub fn time_to_apex(params: &LaunchParameters) -> f64 {
    if params.gravity <= 0.0 {
        return 0.0;
    }
    params.speed * params.sin_angle() / params.gravity
}

/// Peak height above ground reached during the flight
pub fn max_height(params: &LaunchParameters) -> f64 {
    let t_apex = time_to_apex(params);
    let v_up = params.speed * params.sin_angle();
    params.initial_height + v_up * t_apex - 0.5 * params.gravity * t_apex * t_apex
}

/// Horizontal distance covered over the full flight
///
/// Only meaningful for planar motion; `None` for a vertical throw, which
/// has no horizontal component to report.
pub fn range(params: &LaunchParameters) -> Option<f64> {
    match params.model {
        crate::params::MotionModel::Planar => {
            Some(params.speed * params.cos_angle() * flight_time(params))
        }
        crate::params::MotionModel::Vertical => None,
    }
}

/// Speed at the moment of landing
///
/// Magnitude of `(v·cosθ, v·sinθ − g·t_flight)`; independent of the
/// launch angle it equals `√(v² + 2·g·h)`.
pub fn impact_speed(params: &LaunchParameters) -> f64 {
    let t = flight_time(params);
    let vx = params.speed * params.cos_angle();
    let vy = params.speed * params.sin_angle() - params.gravity * t;
    (vx * vx + vy * vy).sqrt()
}

/// Position at elapsed time `t` since launch
pub fn position_at(params: &LaunchParameters, t: f64) -> Vector2<f64> {
    let x = params.speed * params.cos_angle() * t;
    let y = params.initial_height + params.speed * params.sin_angle() * t
        - 0.5 * params.gravity * t * t;
    Vector2::new(x, y)
}

/// Velocity at elapsed time `t` since launch
pub fn velocity_at(params: &LaunchParameters, t: f64) -> Vector2<f64> {
    Vector2::new(
        params.speed * params.cos_angle(),
        params.speed * params.sin_angle() - params.gravity * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MotionModel;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_planar_45_degree_launch() {
        // v=20 m/s, θ=45°, g=9.8, h=0
        let params = LaunchParameters::default();

        assert_close(flight_time(&params), 2.887, 0.01);
        assert_close(max_height(&params), 10.20, 0.01);
        assert_close(range(&params).unwrap(), 40.82, 0.01);
        assert_close(impact_speed(&params), 20.0, 0.01);
    }

    #[test]
    fn test_vertical_throw() {
        // v=20 m/s straight up, g=9.8, h=0
        let params = LaunchParameters::vertical(20.0, 9.8, 0.0);

        assert_close(flight_time(&params), 4.08, 0.01);
        assert_close(max_height(&params), 20.41, 0.01);
        assert_close(impact_speed(&params), 20.0, 0.01);
        assert_eq!(range(&params), None);
    }

    #[test]
    fn test_drop_from_height() {
        // v=0, h=10: pure free fall, angle irrelevant
        let params = LaunchParameters {
            speed: 0.0,
            initial_height: 10.0,
            ..Default::default()
        };

        assert_close(flight_time(&params), 1.43, 0.01);
        assert_close(impact_speed(&params), 14.0, 0.01);
        assert_close(max_height(&params), 10.0, 1e-9);
    }

    #[test]
    fn test_everything_zero() {
        let params = LaunchParameters {
            speed: 0.0,
            ..Default::default()
        };
        assert_eq!(flight_time(&params), 0.0);
        assert_eq!(max_height(&params), 0.0);
        assert_eq!(impact_speed(&params), 0.0);
        assert_eq!(position_at(&params, 0.0), nalgebra::Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_flat_launch_from_height() {
        // θ=0 from a platform still lands; flight time is pure fall time
        let params = LaunchParameters {
            angle_deg: 0.0,
            initial_height: 10.0,
            ..Default::default()
        };
        let t = flight_time(&params);
        assert_close(t, (2.0 * 10.0 / 9.8f64).sqrt(), 1e-9);
        assert_close(range(&params).unwrap(), 20.0 * t, 1e-9);
        assert_close(max_height(&params), 10.0, 1e-9);
    }

    #[test]
    fn test_vertical_equals_90_degree_planar() {
        let planar = LaunchParameters {
            angle_deg: 90.0,
            initial_height: 3.0,
            ..Default::default()
        };
        let vertical = LaunchParameters::vertical(20.0, 9.8, 3.0);

        assert_close(flight_time(&planar), flight_time(&vertical), 1e-9);
        assert_close(max_height(&planar), max_height(&vertical), 1e-9);
        assert_close(impact_speed(&planar), impact_speed(&vertical), 1e-9);
        for i in 0..10 {
            let t = i as f64 * 0.2;
            let y_planar = position_at(&planar, t).y;
            let y_vertical = position_at(&vertical, t).y;
            assert_close(y_planar, y_vertical, 1e-9);
        }
    }

    #[test]
    fn test_position_lands_near_zero() {
        let params = LaunchParameters {
            speed: 35.0,
            angle_deg: 60.0,
            initial_height: 5.0,
            ..Default::default()
        };
        let y_final = position_at(&params, flight_time(&params)).y;
        assert_close(y_final, 0.0, 1e-9);
    }

    #[test]
    fn test_apex_at_half_flight_time_from_ground() {
        let params = LaunchParameters {
            speed: 30.0,
            angle_deg: 30.0,
            ..Default::default()
        };
        let t_flight = flight_time(&params);
        assert_close(time_to_apex(&params), t_flight / 2.0, 1e-9);
        assert_close(position_at(&params, t_flight / 2.0).y, max_height(&params), 1e-9);
    }

    #[test]
    fn test_velocity_at_apex_is_horizontal() {
        let params = LaunchParameters::default();
        let v = velocity_at(&params, time_to_apex(&params));
        assert_close(v.y, 0.0, 1e-9);
        assert_close(v.x, 20.0 * 45f64.to_radians().cos(), 1e-9);
    }

    #[test]
    fn test_non_positive_gravity_sentinel() {
        let params = LaunchParameters {
            gravity: 0.0,
            ..Default::default()
        };
        assert_eq!(flight_time(&params), 0.0);
        assert_eq!(time_to_apex(&params), 0.0);

        let params = LaunchParameters {
            gravity: -9.8,
            model: MotionModel::Vertical,
            ..Default::default()
        };
        assert_eq!(flight_time(&params), 0.0);
    }
}
