//! Core types for the shot simulation.
//!
//! All units are SI unless noted:
//! - Position: meters (m), `y` is height above the ground plane
//! - Velocity: meters per second (m/s)
//! - Spin: rpm-scale angular velocity vector, used directly in the lift term
//! - Mass: kilograms (kg)
//! - Force: Newtons (N)

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::error::MaterialError;

// =============================================================================
// Vec3 - 3D Vector
// =============================================================================

/// A 3D vector used for positions, velocities, forces, and spin.
///
/// Coordinate system:
/// - X: horizontal, default target line (positive down range)
/// - Y: vertical (positive upward, ground plane at y = 0)
/// - Z: horizontal, lateral
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or zero if magnitude is zero
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < constants::EPSILON {
            Self::ZERO
        } else {
            *self / mag
        }
    }

    /// Cross product
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Length of the xz-plane component.
    pub fn horizontal_magnitude(&self) -> f64 {
        self.x.hypot(self.z)
    }

    /// Distance between two points measured in the xz-plane only.
    pub fn horizontal_distance(&self, other: &Self) -> f64 {
        (*self - *other).horizontal_magnitude()
    }
}

// Operator overloads for Vec3
impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// Kinematic State
// =============================================================================

/// Mutable state of the ball during one simulation run.
///
/// Owned by a single run and threaded through the step loop by `&mut`.
/// While `in_flight`, `pos.y` may dip below the radius mid-step; the
/// ground contact resolver corrects it at the step boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub pos: Vec3,
    pub vel: Vec3,
    pub spin: Vec3,
    pub in_flight: bool,
    pub dt: f64,
}

impl KinematicState {
    /// A ball in flight at `pos` with the given velocity and spin.
    pub fn new(pos: Vec3, vel: Vec3, spin: Vec3, dt: f64) -> Self {
        Self {
            pos,
            vel,
            spin,
            in_flight: true,
            dt,
        }
    }

    /// Speed in the ground plane.
    pub fn horizontal_speed(&self) -> f64 {
        self.vel.horizontal_magnitude()
    }
}

// =============================================================================
// Ball Properties
// =============================================================================

/// Physical properties of a ball.
///
/// Invariant: `mass`, `radius`, `drag_coefficient` and `lift_coefficient` are
/// strictly positive; `restitution` and `rolling_resistance` lie in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallProperties {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub drag_coefficient: f64,
    pub lift_coefficient: f64,
    pub restitution: f64,
    pub rolling_resistance: f64,
}

impl BallProperties {
    /// Regulation golf ball (45.9 g, 42.7 mm diameter).
    pub fn regulation() -> Self {
        Self {
            name: "Regulation".to_string(),
            mass: 0.0459,
            radius: 0.02135,
            drag_coefficient: 0.47,
            lift_coefficient: 0.25,
            restitution: 0.8,
            rolling_resistance: 0.02,
        }
    }

    /// Frontal area seen by the airflow (πr²).
    pub fn cross_sectional_area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Check the physical invariants. Used when loading from configuration.
    pub fn validate(&self) -> Result<(), MaterialError> {
        let positive = [
            ("mass", self.mass),
            ("radius", self.radius),
            ("drag_coefficient", self.drag_coefficient),
            ("lift_coefficient", self.lift_coefficient),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(MaterialError::Invalid {
                    name: self.name.clone(),
                    reason: format!("{} must be positive, got {}", field, value),
                });
            }
        }

        let unit = [
            ("restitution", self.restitution),
            ("rolling_resistance", self.rolling_resistance),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(MaterialError::Invalid {
                    name: self.name.clone(),
                    reason: format!("{} must be within [0, 1], got {}", field, value),
                });
            }
        }

        Ok(())
    }
}

impl Default for BallProperties {
    fn default() -> Self {
        Self::regulation()
    }
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Physical constants and numeric guards used in the simulation.
///
/// The guard thresholds shape every trajectory; changing them changes results.
pub mod constants {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f64 = 9.81;

    /// Air density at sea level, 15°C (kg/m³)
    pub const AIR_DENSITY: f64 = 1.225;

    /// Small value for floating-point comparisons
    pub const EPSILON: f64 = 1e-10;

    /// Below this air-relative speed (m/s) drag and lift are zero.
    pub const MIN_RELATIVE_SPEED: f64 = 0.01;

    /// Below this |ω × v| magnitude the lift force is zero.
    pub const MIN_MAGNUS_CROSS: f64 = 0.001;

    /// Horizontal speed (m/s) at or below which a grounded ball stops.
    pub const STOP_SPEED: f64 = 0.1;

    /// Spin retained per 1/60 s of flight.
    pub const SPIN_DECAY_PER_FRAME: f64 = 0.99;

    /// Spin retained on each bounce.
    pub const BOUNCE_SPIN_DAMPING: f64 = 0.8;

    /// Default fixed time step (s)
    pub const DEFAULT_TIME_STEP: f64 = 1.0 / 60.0;

    /// Smallest accepted time step (s)
    pub const MIN_TIME_STEP: f64 = 1e-4;

    /// Upper bound on integration steps in one run.
    pub const MAX_SIMULATION_STEPS: usize = 200_000;

    /// Hard ceiling on simulated time (s)
    pub const MAX_SIMULATION_TIME: f64 = 15.0;

    /// Down-range distance (m) of the implicit target when none is given.
    pub const DEFAULT_TARGET_DISTANCE: f64 = 100.0;
}

// =============================================================================
// Tests
// =============================================================================
