//! Club archetypes and their reference data.
//!
//! Each club maps to a fixed profile (loft, typical carry band, nominal
//! spin). The table is compiled in and only ever read; it feeds efficiency
//! and grading, never the physics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nominal spin characteristics of a club, in rpm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NominalSpin {
    pub backspin: f64,
    pub sidespin: f64,
}

/// Reference profile for one club.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClubProfile {
    pub name: &'static str,
    /// Loft angle in degrees
    pub loft: f64,
    /// Typical carry distance band `[min, max]` in meters
    pub typical_distance: [f64; 2],
    pub nominal_spin: NominalSpin,
}

/// The fourteen club archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubArchetype {
    Driver,
    Wood3,
    Wood5,
    Iron3,
    Iron4,
    Iron5,
    Iron6,
    Iron7,
    Iron8,
    Iron9,
    PitchingWedge,
    SandWedge,
    LobWedge,
    Putter,
}

const fn profile(
    name: &'static str,
    loft: f64,
    min: f64,
    max: f64,
    backspin: f64,
    sidespin: f64,
) -> ClubProfile {
    ClubProfile {
        name,
        loft,
        typical_distance: [min, max],
        nominal_spin: NominalSpin { backspin, sidespin },
    }
}

// Indexed by `ClubArchetype as usize`; order must match the enum.
static CLUB_TABLE: [ClubProfile; 14] = [
    profile("Driver", 10.5, 180.0, 250.0, 2500.0, 300.0),
    profile("3 Wood", 15.0, 160.0, 220.0, 3500.0, 300.0),
    profile("5 Wood", 18.0, 150.0, 200.0, 4000.0, 300.0),
    profile("3 Iron", 21.0, 140.0, 180.0, 4500.0, 250.0),
    profile("4 Iron", 24.0, 130.0, 170.0, 5000.0, 250.0),
    profile("5 Iron", 27.0, 120.0, 160.0, 5500.0, 250.0),
    profile("6 Iron", 30.0, 110.0, 150.0, 6000.0, 200.0),
    profile("7 Iron", 34.0, 100.0, 140.0, 7000.0, 200.0),
    profile("8 Iron", 38.0, 90.0, 130.0, 8000.0, 200.0),
    profile("9 Iron", 42.0, 80.0, 120.0, 8500.0, 150.0),
    profile("Pitching Wedge", 46.0, 70.0, 110.0, 9000.0, 150.0),
    profile("Sand Wedge", 56.0, 40.0, 80.0, 10000.0, 100.0),
    profile("Lob Wedge", 60.0, 20.0, 60.0, 10500.0, 100.0),
    profile("Putter", 3.0, 0.0, 30.0, 0.0, 0.0),
];

impl ClubArchetype {
    /// Every archetype, longest club first.
    pub const ALL: [ClubArchetype; 14] = [
        ClubArchetype::Driver,
        ClubArchetype::Wood3,
        ClubArchetype::Wood5,
        ClubArchetype::Iron3,
        ClubArchetype::Iron4,
        ClubArchetype::Iron5,
        ClubArchetype::Iron6,
        ClubArchetype::Iron7,
        ClubArchetype::Iron8,
        ClubArchetype::Iron9,
        ClubArchetype::PitchingWedge,
        ClubArchetype::SandWedge,
        ClubArchetype::LobWedge,
        ClubArchetype::Putter,
    ];

    pub fn profile(self) -> &'static ClubProfile {
        &CLUB_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// Loft angle in degrees.
    pub fn loft(self) -> f64 {
        self.profile().loft
    }

    /// Typical carry band `[min, max]` in meters.
    pub fn typical_distance(self) -> [f64; 2] {
        self.profile().typical_distance
    }

    /// Midpoint of the typical carry band.
    pub fn typical_midpoint(self) -> f64 {
        let [min, max] = self.typical_distance();
        (min + max) / 2.0
    }

    pub fn nominal_spin(self) -> NominalSpin {
        self.profile().nominal_spin
    }
}

impl fmt::Display for ClubArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
