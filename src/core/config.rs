//=========================================================================
// Game Configuration
//=========================================================================
//
// Fixed tuning constants for the rope, the field and the tick rate.
//
// These are not user-facing settings. `GameConfig` bundles them so the
// engine builder can override the few values that make sense to vary
// (field size, tick interval, window title) for tests and tooling.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Constants ===========================================================

/// Logical field width; the rope center sits at half of it.
pub const FIELD_WIDTH: f64 = 900.0;

/// Logical field height used by the simulation.
pub const FIELD_HEIGHT: f64 = 1000.0;

/// Height of the display surface (the window is shorter than the field).
pub const DISPLAY_HEIGHT: f64 = 700.0;

/// Distance between the two players' start positions.
pub const ROPE_LENGTH: f64 = 140.0;

/// Fraction of the rope length covered by a single pull.
pub const PULL_FRACTION: f64 = 0.05;

/// Interval between two logic ticks (and between two render ticks).
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Default window title.
pub const WINDOW_TITLE: &str = "Tug Of War";

//=== GameConfig ==========================================================

/// Session configuration.
///
/// `Default` yields the fixed constants above. Rope length and pull
/// fraction are not configurable; only the field geometry and pacing are.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Simulation field width.
    pub field_width: f64,

    /// Simulation field height.
    pub field_height: f64,

    /// Display surface size (width, height) in logical pixels.
    pub display_size: (f64, f64),

    /// Pacing of both periodic loops.
    pub tick_interval: Duration,

    /// Window title prefix.
    pub window_title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            display_size: (FIELD_WIDTH, DISPLAY_HEIGHT),
            tick_interval: TICK_INTERVAL,
            window_title: WINDOW_TITLE.to_string(),
        }
    }
}

impl GameConfig {
    /// Distance a single pull moves a player.
    #[inline]
    pub fn pull_distance() -> f64 {
        ROPE_LENGTH * PULL_FRACTION
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
