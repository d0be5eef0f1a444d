//! Ground contact detection and resolution.
//!
//! This module handles:
//! - **Detection**: Deciding when the ball has reached the ground plane
//! - **Resolution**: Bounce, rolling friction, spin damping and the stop rule
//!
//! ## Contact Rule
//!
//! The course is a flat plane at y = 0. The ball touches it when its centre
//! is within one radius of the plane. The check runs once per step, after
//! integration, so the ball may overshoot below the plane mid-step:
//!
//! ```text
//! step k          step k+1
//!    ●
//!     \
//!      \             ● clamped back to y = radius
//! ══════\═══════════════════ y = 0
//!        ● integrated position (y <= radius)
//! ```
//!
//! There is a single authoritative condition, `pos.y <= radius`; a ball that
//! starts at or below the plane is caught by it on its first step.

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;
