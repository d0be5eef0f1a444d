//! Shot simulation driver.
//!
//! [`ShotSimulator::simulate`] turns one set of launch conditions into one
//! [`ShotResult`]. Each run owns its [`KinematicState`] and trajectory
//! buffer and stops within `max_time` simulated seconds.
//!
//! ## Step Loop
//!
//! ```text
//! while in_flight && elapsed < max_time:
//!     record position
//!     F = gravity + drag + magnus
//!     semi-implicit Euler step
//!     if y <= radius: resolve ground contact
//!     elapsed += dt
//! ```

use chrono::{DateTime, Utc};
use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clubs::ClubArchetype;
use crate::contact::{ContactResponse, GroundContactResolver, GroundPlane};
use crate::error::MaterialError;
use crate::evaluation::target_accuracy;
use crate::forces::ShotForces;
use crate::integrator::SemiImplicitEuler;
use crate::types::{constants, BallProperties, KinematicState, Vec3};

// =============================================================================
// Configuration
// =============================================================================

/// Environment and stepping settings for the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed integration step (s)
    pub time_step: f64,
    /// Hard ceiling on simulated time (s)
    pub max_time: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Air density (kg/m³)
    pub air_density: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: constants::DEFAULT_TIME_STEP,
            max_time: constants::MAX_SIMULATION_TIME,
            gravity: constants::GRAVITY,
            air_density: constants::AIR_DENSITY,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self, name: &str) -> Result<(), MaterialError> {
        let checks = [
            ("time_step", self.time_step),
            ("max_time", self.max_time),
            ("gravity", self.gravity),
        ];
        for (field, value) in checks {
            if !(value > 0.0 && value.is_finite()) {
                return Err(MaterialError::Invalid {
                    name: name.to_string(),
                    reason: format!("{} must be positive, got {}", field, value),
                });
            }
        }
        if self.time_step < constants::MIN_TIME_STEP {
            return Err(MaterialError::Invalid {
                name: name.to_string(),
                reason: format!(
                    "time_step must be at least {}, got {}",
                    constants::MIN_TIME_STEP,
                    self.time_step
                ),
            });
        }
        if self.step_budget() > constants::MAX_SIMULATION_STEPS as f64 {
            return Err(MaterialError::Invalid {
                name: name.to_string(),
                reason: format!(
                    "max_time {} needs more than {} steps of {}",
                    self.max_time,
                    constants::MAX_SIMULATION_STEPS,
                    self.time_step
                ),
            });
        }
        if !(self.air_density >= 0.0 && self.air_density.is_finite()) {
            return Err(MaterialError::Invalid {
                name: name.to_string(),
                reason: format!("air_density must be non-negative, got {}", self.air_density),
            });
        }
        Ok(())
    }

    /// Number of steps needed to reach `max_time`.
    pub fn step_budget(&self) -> f64 {
        (self.max_time / self.time_step).ceil()
    }
}

// =============================================================================
// Shot Parameters
// =============================================================================

/// Launch conditions for one shot. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotParameters {
    /// Opaque identifier
    pub id: Uuid,
    /// Wall-clock time at which the parameters were created
    pub created_at: DateTime<Utc>,
    pub initial_position: Vec3,
    pub initial_velocity: Vec3,
    pub spin: Vec3,
    pub club: ClubArchetype,
    pub wind: Vec3,
    pub target: Option<Vec3>,
}

impl ShotParameters {
    /// Calm conditions, no target.
    pub fn new(
        initial_position: Vec3,
        initial_velocity: Vec3,
        spin: Vec3,
        club: ClubArchetype,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            initial_position,
            initial_velocity,
            spin,
            club,
            wind: Vec3::ZERO,
            target: None,
        }
    }

    pub fn with_wind(mut self, wind: Vec3) -> Self {
        self.wind = wind;
        self
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = Some(target);
        self
    }

    /// The supplied target, or a point 100 m down range of the launch.
    pub fn target_or_default(&self) -> Vec3 {
        self.target.unwrap_or_else(|| {
            self.initial_position + Vec3::new(constants::DEFAULT_TARGET_DISTANCE, 0.0, 0.0)
        })
    }
}

// =============================================================================
// Shot Result
// =============================================================================

/// One ground contact during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    /// Step (1-based) after which the contact was resolved; also the index
    /// of the post-contact position in the trajectory
    pub step: usize,
    /// Simulated time of the contact (s)
    pub time: f64,
    /// Ball centre after resolution
    pub position: Vec3,
    pub response: ContactResponse,
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotResult {
    /// Position before every step, then the final position
    pub trajectory: Vec<Vec3>,
    /// Where the ball first came down; `None` if it never did
    pub landing_position: Option<Vec3>,
    pub landing_index: Option<usize>,
    /// Where the run ended (at rest, or at the time ceiling)
    pub final_position: Vec3,
    /// Carry: launch to landing in the ground plane (m)
    pub distance: f64,
    /// Launch to final position in the ground plane (m)
    pub total_distance: f64,
    /// Simulated time until landing (s)
    pub flight_time: f64,
    /// Simulated time of the whole run (s)
    pub total_time: f64,
    /// Apex of the carry above launch height (m)
    pub max_height: f64,
    pub apex_index: usize,
    /// Landing accuracy against the target, in `[0, 1]`
    pub accuracy: f64,
    pub contacts: Vec<ContactEvent>,
    /// Whether the ball came to rest before the ceiling
    pub stopped: bool,
}

impl ShotResult {
    /// Horizontal distance covered after landing.
    pub fn roll_distance(&self) -> f64 {
        (self.total_distance - self.distance).max(0.0)
    }
}

// =============================================================================
// Simulator
// =============================================================================

/// Runs shots for one ball under one set of conditions.
#[derive(Debug, Clone)]
pub struct ShotSimulator {
    ball: BallProperties,
    config: SimulationConfig,
    forces: ShotForces,
    ground: GroundPlane,
    resolver: GroundContactResolver,
}

impl Default for ShotSimulator {
    fn default() -> Self {
        Self::new(BallProperties::regulation(), SimulationConfig::default())
    }
}

impl ShotSimulator {
    /// Build a simulator.
    ///
    /// A `time_step` below [`constants::MIN_TIME_STEP`] or a non-positive or
    /// non-finite `max_time` falls back to the default. A `max_time` needing
    /// more than [`constants::MAX_SIMULATION_STEPS`] steps is shortened.
    pub fn new(ball: BallProperties, mut config: SimulationConfig) -> Self {
        let defaults = SimulationConfig::default();
        if !(config.time_step >= constants::MIN_TIME_STEP && config.time_step.is_finite()) {
            warn!(
                "Invalid time step {}, using {}",
                config.time_step, defaults.time_step
            );
            config.time_step = defaults.time_step;
        }
        if !(config.max_time > 0.0 && config.max_time.is_finite()) {
            warn!(
                "Invalid time ceiling {}, using {}",
                config.max_time, defaults.max_time
            );
            config.max_time = defaults.max_time;
        }
        if config.step_budget() > constants::MAX_SIMULATION_STEPS as f64 {
            let max_time = (constants::MAX_SIMULATION_STEPS - 1) as f64 * config.time_step;
            warn!(
                "Time ceiling {} exceeds {} steps, using {}",
                config.max_time,
                constants::MAX_SIMULATION_STEPS,
                max_time
            );
            config.max_time = max_time;
        }

        Self {
            forces: ShotForces::new(config.air_density, config.gravity),
            resolver: GroundContactResolver::new(config.gravity),
            ground: GroundPlane,
            ball,
            config,
        }
    }

    pub fn ball(&self) -> &BallProperties {
        &self.ball
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate one shot from launch to rest or to the time ceiling.
    pub fn simulate(&self, params: &ShotParameters) -> ShotResult {
        let dt = self.config.time_step;
        let max_time = self.config.max_time;
        let elapsed = |steps: usize| steps as f64 * dt;

        debug!(
            "Simulating {} shot {}: launch speed {:.2} m/s",
            params.club,
            params.id,
            params.initial_velocity.magnitude()
        );

        let mut state = KinematicState::new(
            params.initial_position,
            params.initial_velocity,
            params.spin,
            dt,
        );
        let mut trajectory = Vec::new();
        let mut contacts = Vec::new();
        let mut landing: Option<(usize, f64)> = None;
        let mut apex_index = 0;
        let mut apex_y = params.initial_position.y;
        let mut steps = 0usize;

        while state.in_flight
            && elapsed(steps) < max_time
            && steps < constants::MAX_SIMULATION_STEPS
        {
            if landing.is_none() && state.pos.y > apex_y {
                apex_y = state.pos.y;
                apex_index = trajectory.len();
            }
            trajectory.push(state.pos);

            SemiImplicitEuler::step_with(&mut state, &self.ball, &self.forces, params.wind);
            steps += 1;

            if let Some(info) = self.ground.detect(&state, &self.ball) {
                let response = self.resolver.resolve(&mut state, &self.ball);
                let time = elapsed(steps).min(max_time);
                trace!(
                    "Contact at step {} ({:.2}, {:.2}) depth {:.4}: \
                     vy {:.3} -> {:.3}, v_xz {:.3} -> {:.3}, stopped={}",
                    steps,
                    info.point.x,
                    info.point.z,
                    info.penetration,
                    response.vertical_before,
                    response.vertical_after,
                    response.horizontal_before,
                    response.horizontal_after,
                    response.stopped
                );
                if landing.is_none() {
                    landing = Some((steps, time));
                }
                contacts.push(ContactEvent {
                    step: steps,
                    time,
                    position: state.pos,
                    response,
                });
            }
        }

        trajectory.push(state.pos);
        let total_time = elapsed(steps).min(max_time);
        let stopped = !state.in_flight;

        if !stopped {
            warn!(
                "Shot {} reached the {:.1}s ceiling without stopping",
                params.id, max_time
            );
        }

        let final_position = state.pos;
        if landing.is_none() && final_position.y > apex_y {
            apex_y = final_position.y;
            apex_index = trajectory.len() - 1;
        }

        let landing_index = landing.map(|(index, _)| index);
        let landing_position = landing_index.map(|index| trajectory[index]);
        let flight_time = landing.map_or(total_time, |(_, time)| time);
        let carry_end = landing_position.unwrap_or(final_position);

        let distance = carry_end.horizontal_distance(&params.initial_position);
        let accuracy = target_accuracy(
            params.initial_position,
            carry_end,
            params.target_or_default(),
        );

        debug!(
            "Shot {} finished after {} steps: carry {:.1}m, flight {:.2}s, stopped={}",
            params.id, steps, distance, flight_time, stopped
        );

        ShotResult {
            landing_position,
            landing_index,
            final_position,
            distance,
            total_distance: final_position.horizontal_distance(&params.initial_position),
            flight_time,
            total_time,
            max_height: apex_y - params.initial_position.y,
            apex_index,
            accuracy,
            contacts,
            stopped,
            trajectory,
        }
    }

    /// Simulate independent shots in parallel, preserving input order.
    pub fn simulate_batch(&self, shots: &[ShotParameters]) -> Vec<ShotResult> {
        shots.par_iter().map(|params| self.simulate(params)).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
