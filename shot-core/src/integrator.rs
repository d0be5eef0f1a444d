//! Fixed-step integration of the ball state.
//!
//! The integrator is semi-implicit (symplectic) Euler: velocity is updated
//! from the net force first, then position moves with the *new* velocity.
//!
//! ```text
//! 1. a     = F_net / m
//! 2. v_new = v + a*dt
//! 3. x_new = x + v_new*dt
//! 4. ω_new = ω * 0.99^(dt*60)
//! ```
//!
//! Step size never adapts. Identical inputs always give identical
//! trajectories.

use crate::types::{constants, BallProperties, KinematicState, Vec3};

/// Trait for computing the net force on the ball.
///
/// Implementations provide the physics model (gravity, drag, Magnus, etc.)
pub trait ForceModel {
    /// Net force in Newtons given the current state and the wind vector.
    fn net_force(&self, state: &KinematicState, props: &BallProperties, wind: Vec3) -> Vec3;
}

/// Semi-implicit Euler integrator.
pub struct SemiImplicitEuler;

impl SemiImplicitEuler {
    /// Advance `state` by its own time step under `net_force`.
    ///
    /// Returns the linear acceleration that was applied.
    pub fn step(state: &mut KinematicState, props: &BallProperties, net_force: Vec3) -> Vec3 {
        let dt = state.dt;
        let acceleration = net_force / props.mass;

        state.vel += acceleration * dt;
        state.pos += state.vel * dt;
        state.spin = state.spin * Self::spin_retention(dt);

        acceleration
    }

    /// Evaluate `forces` on the current state, then advance one step.
    pub fn step_with<F: ForceModel>(
        state: &mut KinematicState,
        props: &BallProperties,
        forces: &F,
        wind: Vec3,
    ) -> Vec3 {
        let force = forces.net_force(state, props, wind);
        Self::step(state, props, force)
    }

    /// Fraction of spin kept after `dt` seconds of flight.
    pub fn spin_retention(dt: f64) -> f64 {
        constants::SPIN_DECAY_PER_FRAME.powf(dt * 60.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Simple gravity-only force model for testing
    struct GravityOnly;

    impl ForceModel for GravityOnly {
        fn net_force(&self, _state: &KinematicState, props: &BallProperties, _wind: Vec3) -> Vec3 {
            Vec3::new(0.0, -props.mass * 9.81, 0.0)
        }
    }

    #[test]
    fn test_free_fall() {
        let props = BallProperties::default();
        let mut state =
            KinematicState::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, Vec3::ZERO, 0.001);

        // t = sqrt(2h/g) ≈ 0.4515s
        for _ in 0..451 {
            SemiImplicitEuler::step_with(&mut state, &props, &GravityOnly, Vec3::ZERO);
        }

        assert!(
            state.pos.y.abs() < 0.05,
            "Ball should be near ground, got y={}",
            state.pos.y
        );
    }

    #[test]
    fn test_position_uses_updated_velocity() {
        let props = BallProperties::default();
        let mut state = KinematicState::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, 0.1);

        let acc = SemiImplicitEuler::step_with(&mut state, &props, &GravityOnly, Vec3::ZERO);

        assert!((acc.y + 9.81).abs() < 1e-12);
        assert!((state.vel.y + 0.981).abs() < 1e-12);
        // Semi-implicit: x moves by v_new * dt, not v_old * dt
        assert!((state.pos.y + 0.0981).abs() < 1e-12);
    }

    #[test]
    fn test_horizontal_motion() {
        let props = BallProperties::default();
        let mut state =
            KinematicState::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 1.0);

        SemiImplicitEuler::step(&mut state, &props, Vec3::ZERO);

        assert!((state.pos.x - 10.0).abs() < 1e-10);
        assert!((state.vel.x - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_spin_bleeds_one_percent_per_frame() {
        let props = BallProperties::default();
        let spin = Vec3::new(0.0, 0.0, 3000.0);
        let mut state = KinematicState::new(
            Vec3::ZERO,
            Vec3::ZERO,
            spin,
            constants::DEFAULT_TIME_STEP,
        );

        for _ in 0..60 {
            SemiImplicitEuler::step(&mut state, &props, Vec3::ZERO);
        }

        let expected = 3000.0 * 0.99f64.powi(60);
        assert!(
            (state.spin.z - expected).abs() < 1e-6,
            "Expected spin {}, got {}",
            expected,
            state.spin.z
        );
    }

    #[test]
    fn test_spin_retention_scales_with_dt() {
        assert!((SemiImplicitEuler::spin_retention(1.0 / 60.0) - 0.99).abs() < 1e-12);
        assert!((SemiImplicitEuler::spin_retention(1.0 / 30.0) - 0.9801).abs() < 1e-12);
        assert_eq!(SemiImplicitEuler::spin_retention(0.0), 1.0);
    }
}
