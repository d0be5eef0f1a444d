//! Ground plane contact detection.

use crate::types::{BallProperties, KinematicState, Vec3};

/// Detailed contact information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactInfo {
    /// Point on the ground plane below the ball centre
    pub point: Vec3,
    /// How far the centre sits below `radius` (>= 0)
    pub penetration: f64,
}

/// The flat ground plane at y = 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundPlane;

impl GroundPlane {
    /// Detect contact after an integration step.
    ///
    /// Returns `None` while the ball centre stays above one radius.
    pub fn detect(
        &self,
        ball: &KinematicState,
        ball_props: &BallProperties,
    ) -> Option<ContactInfo> {
        let radius = ball_props.radius;
        if ball.pos.y > radius {
            return None;
        }

        Some(ContactInfo {
            point: Vec3::new(ball.pos.x, 0.0, ball.pos.z),
            penetration: radius - ball.pos.y,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
