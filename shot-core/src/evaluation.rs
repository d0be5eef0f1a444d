//! Shot evaluation against club norms and a target.
//!
//! Everything here is a pure function of a [`ShotParameters`] and the
//! [`ShotResult`] it produced. The club table only supplies reference
//! values; nothing is fed back into the physics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::simulation::{ShotParameters, ShotResult};
use crate::types::Vec3;

/// Ideal launch angle as a fraction of club loft.
const IDEAL_LAUNCH_FRACTION: f64 = 0.7;

/// Floor on the launch-to-target reach so very short targets stay defined.
const MIN_TARGET_REACH: f64 = 1.0;

/// Score how close `landing` came to `target`, in `[0, 1]`.
///
/// 1.0 is a hole-out, 0.0 a miss at least as long as the launch-to-target
/// distance. Distances are measured in the ground plane.
pub fn target_accuracy(initial: Vec3, landing: Vec3, target: Vec3) -> f64 {
    let reach = initial.horizontal_distance(&target).max(MIN_TARGET_REACH);
    let miss = landing.horizontal_distance(&target);
    (1.0 - miss / reach).clamp(0.0, 1.0)
}

/// `1 - |actual - ideal| / scale`, clamped to `[0, 1]`.
fn deviation_score(actual: f64, ideal: f64, scale: f64) -> f64 {
    (1.0 - (actual - ideal).abs() / scale).clamp(0.0, 1.0)
}

/// Letter grade for an overall rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    APlus,
    A,
    BPlus,
    B,
    CPlus,
    C,
    DPlus,
    D,
    F,
}

impl Grade {
    /// Bucket a rating into the nine-step scale.
    ///
    /// `[0.9, ∞) → A+`, `[0.8, 0.9) → A`, ... `[0.2, 0.3) → D`, below → F.
    pub fn from_rating(rating: f64) -> Self {
        match rating {
            r if r >= 0.9 => Grade::APlus,
            r if r >= 0.8 => Grade::A,
            r if r >= 0.7 => Grade::BPlus,
            r if r >= 0.6 => Grade::B,
            r if r >= 0.5 => Grade::CPlus,
            r if r >= 0.4 => Grade::C,
            r if r >= 0.3 => Grade::DPlus,
            r if r >= 0.2 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breakdown of a shot against the ideal for its club.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealComparison {
    pub distance_efficiency: f64,
    pub launch_angle_accuracy: f64,
    pub spin_accuracy: f64,
    pub target_accuracy: f64,
    /// Mean of the four components above
    pub overall_rating: f64,
}

impl IdealComparison {
    pub fn grade(&self) -> Grade {
        Grade::from_rating(self.overall_rating)
    }
}

/// Evaluates one simulated shot.
pub struct ShotEvaluator<'a> {
    params: &'a ShotParameters,
    result: &'a ShotResult,
}

impl<'a> ShotEvaluator<'a> {
    pub fn new(params: &'a ShotParameters, result: &'a ShotResult) -> Self {
        Self { params, result }
    }

    /// Launch angle above horizontal, in degrees.
    pub fn launch_angle(&self) -> f64 {
        let vel = self.params.initial_velocity;
        vel.y.atan2(vel.horizontal_magnitude()).to_degrees()
    }

    /// Launch speed in m/s.
    pub fn ball_speed(&self) -> f64 {
        self.params.initial_velocity.magnitude()
    }

    /// Carry relative to the middle of the club's typical band, capped at 1.
    pub fn efficiency(&self) -> f64 {
        let midpoint = self.params.club.typical_midpoint();
        (self.result.distance / midpoint).min(1.0)
    }

    /// Closeness of the launch angle to `0.7 * loft`.
    pub fn launch_angle_accuracy(&self) -> f64 {
        let ideal = self.params.club.loft() * IDEAL_LAUNCH_FRACTION;
        deviation_score(self.launch_angle(), ideal, ideal)
    }

    /// Closeness of the spin magnitude to the club's nominal backspin.
    pub fn spin_accuracy(&self) -> f64 {
        let nominal = self.params.club.nominal_spin().backspin;
        deviation_score(self.params.spin.magnitude(), nominal, nominal.max(1.0))
    }

    pub fn compare_to_ideal(&self) -> IdealComparison {
        let distance_efficiency = self.efficiency();
        let launch_angle_accuracy = self.launch_angle_accuracy();
        let spin_accuracy = self.spin_accuracy();
        let target_accuracy = self.result.accuracy;

        IdealComparison {
            distance_efficiency,
            launch_angle_accuracy,
            spin_accuracy,
            target_accuracy,
            overall_rating: (distance_efficiency
                + launch_angle_accuracy
                + spin_accuracy
                + target_accuracy)
                / 4.0,
        }
    }

    pub fn grade(&self) -> Grade {
        self.compare_to_ideal().grade()
    }

    /// Display block for the shot. Field order and one-decimal formatting
    /// are relied on by exported reports.
    pub fn summary(&self) -> String {
        format!(
            "Club: {}\n\
             Distance: {:.1}m\n\
             Launch Angle: {:.1}°\n\
             Ball Speed: {:.1} m/s\n\
             Max Height: {:.1}m\n\
             Flight Time: {:.1}s\n\
             Efficiency: {:.1}%",
            self.params.club,
            self.result.distance,
            self.launch_angle(),
            self.ball_speed(),
            self.result.max_height,
            self.result.flight_time,
            self.efficiency() * 100.0,
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
