//! Ground contact resolution for golf shots.
//!
//! Computes the post-contact state based on:
//! - Coefficient of restitution (vertical bounce)
//! - Rolling resistance (horizontal deceleration)
//! - Spin damping on every bounce
//!
//! ## Flight State Machine
//!
//! ```text
//!              contact, |v_xz| > 0.1
//!            ┌───────────────────────┐
//!            ▼                       │
//!   ──▶ InFlight ────────────────────┘
//!            │
//!            │ contact, |v_xz| <= 0.1
//!            ▼
//!         Stopped   (terminal)
//! ```
//!
//! ## Model Assumptions
//!
//! - **Instantaneous contact**: no deformation is simulated; the coefficients
//!   capture its integrated effect.
//! - **Flat ground**: the normal is always +Y, so the vertical component is
//!   the normal component and xz is the tangential plane.

use serde::{Deserialize, Serialize};

use crate::types::{constants, BallProperties, KinematicState};

/// What a single ground contact did to the ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Vertical velocity arriving at the ground
    pub vertical_before: f64,
    /// Vertical velocity leaving the ground
    pub vertical_after: f64,
    /// Horizontal speed before friction
    pub horizontal_before: f64,
    /// Horizontal speed after friction (zero if stopped)
    pub horizontal_after: f64,
    /// Whether this contact ended the flight
    pub stopped: bool,
}

/// Resolver for contacts with the ground plane.
#[derive(Debug, Clone)]
pub struct GroundContactResolver {
    /// Gravitational acceleration in m/s², scales rolling friction
    pub gravity: f64,
}

impl Default for GroundContactResolver {
    fn default() -> Self {
        Self {
            gravity: constants::GRAVITY,
        }
    }
}

impl GroundContactResolver {
    pub fn new(gravity: f64) -> Self {
        Self { gravity }
    }

    /// Resolve a contact in place.
    ///
    /// The ball is placed back at `y = radius`, its vertical velocity is
    /// reflected with energy loss, and its horizontal speed decays by
    /// `rolling_resistance * g * dt`. A ball arriving with horizontal speed
    /// at or below [`constants::STOP_SPEED`] stops and leaves flight for good.
    pub fn resolve(
        &self,
        ball: &mut KinematicState,
        ball_props: &BallProperties,
    ) -> ContactResponse {
        ball.pos.y = ball_props.radius;

        let vertical_before = ball.vel.y;
        ball.vel.y = -ball.vel.y * ball_props.restitution;

        let horizontal_before = ball.horizontal_speed();
        let horizontal_after = if horizontal_before <= constants::STOP_SPEED {
            ball.vel.x = 0.0;
            ball.vel.z = 0.0;
            ball.in_flight = false;
            0.0
        } else {
            // F = μ m g, so the deceleration is independent of mass
            let deceleration = ball_props.rolling_resistance * self.gravity;
            let new_speed = (horizontal_before - deceleration * ball.dt).max(0.0);
            let scale = new_speed / horizontal_before;
            ball.vel.x *= scale;
            ball.vel.z *= scale;
            new_speed
        };

        ball.spin = ball.spin * constants::BOUNCE_SPIN_DAMPING;

        ContactResponse {
            vertical_before,
            vertical_after: ball.vel.y,
            horizontal_before,
            horizontal_after,
            stopped: !ball.in_flight,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    fn grounded(vel: Vec3, spin: Vec3) -> KinematicState {
        KinematicState::new(
            Vec3::new(10.0, -0.004, 1.0),
            vel,
            spin,
            constants::DEFAULT_TIME_STEP,
        )
    }

    #[test]
    fn test_bounce_reflects_with_restitution() {
        let props = BallProperties::default();
        let mut ball = grounded(Vec3::new(8.0, -10.0, 0.0), Vec3::ZERO);

        let response = GroundContactResolver::default().resolve(&mut ball, &props);

        assert_eq!(ball.pos.y, props.radius);
        assert!((ball.vel.y - 8.0).abs() < 1e-12, "got vy={}", ball.vel.y);
        assert_eq!(response.vertical_before, -10.0);
        assert_eq!(response.vertical_after, ball.vel.y);
        assert!(ball.in_flight);
        assert!(!response.stopped);
    }

    #[test]
    fn test_rolling_friction_slows_horizontal_speed() {
        let props = BallProperties::default();
        let mut ball = grounded(Vec3::new(3.0, -0.1, 4.0), Vec3::ZERO);

        let response = GroundContactResolver::default().resolve(&mut ball, &props);

        let expected = 5.0 - 0.02 * constants::GRAVITY * constants::DEFAULT_TIME_STEP;
        assert!((response.horizontal_after - expected).abs() < 1e-12);
        assert!((ball.horizontal_speed() - expected).abs() < 1e-12);
        // Direction is preserved
        assert!((ball.vel.x / ball.vel.z - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_friction_never_reverses_direction() {
        let props = BallProperties {
            rolling_resistance: 1.0,
            ..BallProperties::default()
        };
        let mut ball = grounded(Vec3::new(0.12, -0.1, 0.0), Vec3::ZERO);
        ball.dt = 1.0;

        let response = GroundContactResolver::default().resolve(&mut ball, &props);

        assert_eq!(response.horizontal_after, 0.0);
        assert_eq!(ball.vel.x, 0.0);
        // Above the stop threshold on arrival, so still in flight
        assert!(ball.in_flight);
    }

    #[test]
    fn test_slow_ball_stops() {
        let props = BallProperties::default();
        let mut ball = grounded(Vec3::new(0.06, -0.5, 0.05), Vec3::ZERO);

        let response = GroundContactResolver::default().resolve(&mut ball, &props);

        assert!(response.stopped);
        assert!(!ball.in_flight);
        assert_eq!(ball.vel.x, 0.0);
        assert_eq!(ball.vel.z, 0.0);
        // Vertical reflection still applies on the stopping contact
        assert!((ball.vel.y - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_spin_damped_on_bounce() {
        let props = BallProperties::default();
        let mut ball = grounded(Vec3::new(20.0, -5.0, 0.0), Vec3::new(0.0, 100.0, 2500.0));

        GroundContactResolver::default().resolve(&mut ball, &props);

        assert!((ball.spin.z - 2000.0).abs() < 1e-9);
        assert!((ball.spin.y - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_restitution_kills_bounce() {
        let props = BallProperties {
            restitution: 0.0,
            ..BallProperties::default()
        };
        let mut ball = grounded(Vec3::new(5.0, -7.0, 0.0), Vec3::ZERO);

        GroundContactResolver::default().resolve(&mut ball, &props);

        assert_eq!(ball.vel.y, 0.0);
    }
}
