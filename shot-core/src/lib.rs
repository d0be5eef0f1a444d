//! # Shot Core
//!
//! A ball-flight engine for golf shot simulation.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec3, kinematic state, ball properties)
//! - `clubs`: Club archetypes and their reference data
//! - `forces`: Physical forces (gravity, drag, Magnus lift)
//! - `integrator`: Fixed-step semi-implicit Euler integration
//! - `contact`: Ground plane detection and bounce/roll resolution
//! - `simulation`: Main orchestrator, launch to rest
//! - `evaluation`: Efficiency, accuracy and grading
//! - `record`: Flat persistence record
//! - `materials`: YAML-based ball and condition loader
//!
//! ## Example
//!
//! ```
//! use shot_core::{ClubArchetype, ShotEvaluator, ShotParameters, ShotSimulator, Vec3};
//!
//! let params = ShotParameters::new(
//!     Vec3::ZERO,
//!     Vec3::new(14.14, 14.14, 0.0),
//!     Vec3::ZERO,
//!     ClubArchetype::Driver,
//! );
//! let result = ShotSimulator::default().simulate(&params);
//! let grade = ShotEvaluator::new(&params, &result).grade();
//! println!("{:.1} m carry, grade {}", result.distance, grade);
//! ```

pub mod clubs;
pub mod contact;
pub mod error;
pub mod evaluation;
pub mod forces;
pub mod integrator;
pub mod materials;
pub mod record;
pub mod simulation;
pub mod types;

pub use clubs::{ClubArchetype, ClubProfile, NominalSpin};
pub use error::MaterialError;
pub use evaluation::{Grade, IdealComparison, ShotEvaluator};
pub use simulation::{ContactEvent, ShotParameters, ShotResult, ShotSimulator, SimulationConfig};
pub use types::{BallProperties, KinematicState, Vec3};
