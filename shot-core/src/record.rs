//! Flat, serializable shot history record.
//!
//! Every vector is split into scalar columns so the record can be stored
//! as a single row or a flat JSON object. The trajectory is not included.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clubs::ClubArchetype;
use crate::evaluation::{Grade, ShotEvaluator};
use crate::simulation::{ShotParameters, ShotResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub club: ClubArchetype,

    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub velocity_z: f64,
    pub spin_x: f64,
    pub spin_y: f64,
    pub spin_z: f64,
    pub wind_x: f64,
    pub wind_y: f64,
    pub wind_z: f64,
    pub target_x: Option<f64>,
    pub target_y: Option<f64>,
    pub target_z: Option<f64>,

    pub landing_x: Option<f64>,
    pub landing_y: Option<f64>,
    pub landing_z: Option<f64>,
    pub final_x: f64,
    pub final_y: f64,
    pub final_z: f64,
    pub distance: f64,
    pub total_distance: f64,
    pub flight_time: f64,
    pub total_time: f64,
    pub max_height: f64,
    pub accuracy: f64,
    pub stopped: bool,

    pub launch_angle: f64,
    pub ball_speed: f64,
    pub efficiency: f64,
    pub overall_rating: f64,
    pub grade: Grade,
}

impl ShotRecord {
    pub fn new(params: &ShotParameters, result: &ShotResult) -> Self {
        let evaluator = ShotEvaluator::new(params, result);
        let comparison = evaluator.compare_to_ideal();

        Self {
            id: params.id,
            created_at: params.created_at,
            club: params.club,

            position_x: params.initial_position.x,
            position_y: params.initial_position.y,
            position_z: params.initial_position.z,
            velocity_x: params.initial_velocity.x,
            velocity_y: params.initial_velocity.y,
            velocity_z: params.initial_velocity.z,
            spin_x: params.spin.x,
            spin_y: params.spin.y,
            spin_z: params.spin.z,
            wind_x: params.wind.x,
            wind_y: params.wind.y,
            wind_z: params.wind.z,
            target_x: params.target.map(|t| t.x),
            target_y: params.target.map(|t| t.y),
            target_z: params.target.map(|t| t.z),

            landing_x: result.landing_position.map(|p| p.x),
            landing_y: result.landing_position.map(|p| p.y),
            landing_z: result.landing_position.map(|p| p.z),
            final_x: result.final_position.x,
            final_y: result.final_position.y,
            final_z: result.final_position.z,
            distance: result.distance,
            total_distance: result.total_distance,
            flight_time: result.flight_time,
            total_time: result.total_time,
            max_height: result.max_height,
            accuracy: result.accuracy,
            stopped: result.stopped,

            launch_angle: evaluator.launch_angle(),
            ball_speed: evaluator.ball_speed(),
            efficiency: evaluator.efficiency(),
            overall_rating: comparison.overall_rating,
            grade: comparison.grade(),
        }
    }
}
