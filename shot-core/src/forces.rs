//! Physical forces acting on the ball.
//!
//! This module implements the `ForceModel` trait for golf ball flight:
//!
//! - **Gravity**: Constant downward pull, `m * g`
//! - **Drag**: Air resistance opposing air-relative motion, proportional to v²
//! - **Magnus**: Lift from spin, along `spin × relative velocity`
//!
//! All aerodynamic terms use the velocity relative to the wind, so a
//! tailwind lowers drag and a headwind raises it.
//!
//! ```text
//! Backspin on a ball flying down range (+X):
//!     spin around +Z, velocity +X
//!     +Z × +X = +Y  → lift, the ball climbs and carries
//! ```

use crate::integrator::ForceModel;
use crate::types::{constants, BallProperties, KinematicState, Vec3};

/// Complete force model for golf ball flight.
///
/// Combines gravity, aerodynamic drag, and Magnus lift.
#[derive(Debug, Clone)]
pub struct ShotForces {
    /// Air density in kg/m³ (default: sea level)
    pub air_density: f64,

    /// Gravitational acceleration magnitude in m/s²
    pub gravity: f64,

    /// Enable/disable individual forces (useful for testing)
    pub enable_gravity: bool,
    pub enable_drag: bool,
    pub enable_magnus: bool,
}

impl Default for ShotForces {
    fn default() -> Self {
        Self::new(constants::AIR_DENSITY, constants::GRAVITY)
    }
}

impl ShotForces {
    pub fn new(air_density: f64, gravity: f64) -> Self {
        Self {
            air_density,
            gravity,
            enable_gravity: true,
            enable_drag: true,
            enable_magnus: true,
        }
    }

    /// Create a force model with only gravity (for testing).
    pub fn gravity_only() -> Self {
        Self {
            enable_drag: false,
            enable_magnus: false,
            ..Self::default()
        }
    }

    /// Weight of the ball, `(0, -m g, 0)`.
    fn gravity_force(&self, props: &BallProperties) -> Vec3 {
        Vec3::new(0.0, -props.mass * self.gravity, 0.0)
    }

    /// Drag force on the ball.
    ///
    /// F_drag = -0.5 * ρ * Cd * A * |v_rel|² * v̂_rel, with v_rel = v - wind.
    fn drag_force(&self, relative_vel: Vec3, props: &BallProperties) -> Vec3 {
        let speed_sq = relative_vel.magnitude_squared();
        let magnitude = 0.5
            * self.air_density
            * props.drag_coefficient
            * props.cross_sectional_area()
            * speed_sq;

        relative_vel.normalized() * (-magnitude)
    }

    /// Magnus (spin-lift) force on the ball.
    ///
    /// F_magnus = 0.5 * ρ * CL * A * |ω × v_rel| along (ω × v_rel).
    /// Zero when the cross product is too small to normalize.
    fn magnus_force(&self, spin: Vec3, relative_vel: Vec3, props: &BallProperties) -> Vec3 {
        let cross = spin.cross(&relative_vel);
        let cross_mag = cross.magnitude();
        if cross_mag <= constants::MIN_MAGNUS_CROSS {
            return Vec3::ZERO;
        }

        let magnitude = 0.5
            * self.air_density
            * props.lift_coefficient
            * props.cross_sectional_area()
            * cross_mag;

        cross.normalized() * magnitude
    }
}

impl ForceModel for ShotForces {
    fn net_force(&self, state: &KinematicState, props: &BallProperties, wind: Vec3) -> Vec3 {
        let mut force = Vec3::ZERO;

        if self.enable_gravity {
            force += self.gravity_force(props);
        }

        // Aerodynamics vanish below the relative-speed guard
        let relative_vel = state.vel - wind;
        if relative_vel.magnitude() <= constants::MIN_RELATIVE_SPEED {
            return force;
        }

        if self.enable_drag {
            force += self.drag_force(relative_vel, props);
        }

        if self.enable_magnus {
            force += self.magnus_force(state.spin, relative_vel, props);
        }

        force
    }
}

// =============================================================================
// Tests
// =============================================================================
