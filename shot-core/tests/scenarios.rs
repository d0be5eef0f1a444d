//! End-to-end shot scenarios with known outcomes.

use shot_core::evaluation::Grade;
use shot_core::types::constants;
use shot_core::{BallProperties, ClubArchetype, ShotParameters, ShotSimulator, Vec3};

fn launch(vel: Vec3, club: ClubArchetype) -> ShotParameters {
    ShotParameters::new(Vec3::ZERO, vel, Vec3::ZERO, club)
}

/// 45° at ~20 m/s
fn scenario_a() -> ShotParameters {
    launch(Vec3::new(14.14, 14.14, 0.0), ClubArchetype::Driver)
}

// =============================================================================
// Scenario A: drag shortens a 45° shot
// =============================================================================

#[test]
fn scenario_a_drag_reduces_range() {
    let result = ShotSimulator::default().simulate(&scenario_a());

    let vacuum_range = 20.0f64.powi(2) / constants::GRAVITY;
    assert!(!result.trajectory.is_empty());
    assert!(
        (2.0..=4.0).contains(&result.flight_time),
        "flight time {} outside [2, 4]",
        result.flight_time
    );
    assert!(result.distance > 0.0);
    assert!(
        result.distance < vacuum_range,
        "carry {} should be below vacuum range {}",
        result.distance,
        vacuum_range
    );
    assert!(result.max_height > 0.0 && result.max_height < 10.2);
}

#[test]
fn scenario_a_keeps_rolling_after_landing() {
    let result = ShotSimulator::default().simulate(&scenario_a());

    assert!(result.contacts.len() > 1);
    assert!(result.total_distance > result.distance);
    assert!(result.roll_distance() > 0.0);
    assert!(result.total_time >= result.flight_time);
}

// =============================================================================
// Scenario B: wind
// =============================================================================

#[test]
fn scenario_b_tailwind_carries_further() {
    let sim = ShotSimulator::default();
    let calm = sim.simulate(&scenario_a());
    let tailwind = sim.simulate(&scenario_a().with_wind(Vec3::new(5.0, 0.0, 0.0)));

    assert!(
        tailwind.distance >= calm.distance,
        "tailwind {} < calm {}",
        tailwind.distance,
        calm.distance
    );
}

#[test]
fn headwind_shortens_carry() {
    let sim = ShotSimulator::default();
    let calm = sim.simulate(&scenario_a());
    let headwind = sim.simulate(&scenario_a().with_wind(Vec3::new(-5.0, 0.0, 0.0)));

    assert!(headwind.distance < calm.distance);
}

// =============================================================================
// Scenario C: putt rolls out and stops
// =============================================================================

#[test]
fn scenario_c_putt_rolls_then_stops() {
    let result = ShotSimulator::default().simulate(&launch(
        Vec3::new(3.0, 0.0, 0.0),
        ClubArchetype::Putter,
    ));

    // Ground contact on the very first step
    assert_eq!(result.contacts[0].step, 1);
    assert_eq!(result.landing_index, Some(1));
    assert!(result.contacts[0].response.horizontal_before > constants::STOP_SPEED);

    // Rolls over many steps before stopping, and stops before the ceiling
    assert!(result.contacts.len() > 10);
    assert!(result.stopped);
    assert!(result.total_time < constants::MAX_SIMULATION_TIME);

    let speeds: Vec<f64> = result
        .contacts
        .iter()
        .flat_map(|c| [c.response.horizontal_before, c.response.horizontal_after])
        .collect();
    assert!(
        speeds.windows(2).all(|w| w[1] <= w[0]),
        "horizontal speed must never increase after first contact"
    );
    assert!(result.total_distance > 0.0);
}

// =============================================================================
// Scenario D: grading
// =============================================================================

#[test]
fn scenario_d_grade_cut_points() {
    assert_eq!(Grade::from_rating(0.95).to_string(), "A+");
    assert_eq!(Grade::from_rating(0.85).to_string(), "A");
    assert_eq!(Grade::from_rating(0.15).to_string(), "F");
}

// =============================================================================
// Degenerate and directional shots
// =============================================================================

#[test]
fn zero_velocity_shot() {
    let result = ShotSimulator::default().simulate(&launch(Vec3::ZERO, ClubArchetype::Iron5));

    assert!(result.distance.abs() < 1e-9);
    assert!(result.trajectory.len() <= 2);
    assert!(result.stopped);
}

#[test]
fn straight_down_shot_stops_on_first_contact() {
    let params = ShotParameters::new(
        Vec3::new(0.0, 1.5, 0.0),
        Vec3::new(0.0, -30.0, 0.0),
        Vec3::ZERO,
        ClubArchetype::SandWedge,
    );
    let result = ShotSimulator::default().simulate(&params);

    assert!(result.stopped);
    assert_eq!(result.contacts.len(), 1);
    assert_eq!(result.max_height, 0.0);
    assert_eq!(result.apex_index, 0);
}

#[test]
fn backspin_adds_height_and_carry() {
    let sim = ShotSimulator::default();
    let plain = sim.simulate(&scenario_a());
    let mut spun = scenario_a();
    spun.spin = Vec3::new(0.0, 0.0, 2.0);
    let spun = sim.simulate(&spun);

    assert!(spun.max_height > plain.max_height);
    assert!(spun.distance > plain.distance);
}

#[test]
fn sidespin_curves_off_line() {
    let mut params = scenario_a();
    params.spin = Vec3::new(0.0, 2.0, 0.0);
    let result = ShotSimulator::default().simulate(&params);

    // +Y spin × +X velocity points along -Z
    let landing = result.landing_position.unwrap();
    assert!(landing.z < 0.0, "expected a curve toward -Z, got z={}", landing.z);
}

#[test]
fn livelier_ball_bounces_higher() {
    let dead = BallProperties {
        restitution: 0.3,
        ..BallProperties::regulation()
    };
    let sim_dead = ShotSimulator::new(dead, Default::default());
    let sim_live = ShotSimulator::default();

    let dead = sim_dead.simulate(&scenario_a());
    let live = sim_live.simulate(&scenario_a());

    let first_bounce = |r: &shot_core::ShotResult| r.contacts[0].response.vertical_after;
    assert!(first_bounce(&live) > first_bounce(&dead));
    // Identical until the first contact
    assert_eq!(dead.landing_index, live.landing_index);
    assert_eq!(dead.distance, live.distance);
}
