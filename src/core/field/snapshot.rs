//=========================================================================
// Field Snapshot
//=========================================================================
//
// Read-only views handed from the core to the presentation side.
//
//   Progress:      per-player share of the rope pulled past center
//   Winner:        terminal outcome of a session
//   FieldSnapshot: everything a drawer needs for one frame
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::PlayerId;

//=== Progress ============================================================

/// Percentage of the rope each player has gained, as displayed.
///
/// Measured from the center: player 1 at `center - rope/2` reads 50%,
/// and a player who was dragged onto the center line reads 0%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub player1: f64,
    pub player2: f64,
}

impl Progress {
    /// Computes both percentages from raw positions.
    pub fn measure(center: f64, rope_length: f64, player1: f64, player2: f64) -> Self {
        Self {
            player1: (center - player1) / rope_length * 100.0,
            player2: (player2 - center) / rope_length * 100.0,
        }
    }

    pub fn of(&self, id: PlayerId) -> f64 {
        match id {
            PlayerId::One => self.player1,
            PlayerId::Two => self.player2,
        }
    }

    /// Label text for one player, e.g. `"Player 1: 50.00%"`.
    pub fn label(&self, id: PlayerId) -> String {
        format!("{}: {:.2}%", id, self.of(id))
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.label(PlayerId::One), self.label(PlayerId::Two))
    }
}

//=== Winner ==============================================================

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Winner {
    pub player: PlayerId,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Wins!", self.player)
    }
}

//=== FieldSnapshot =======================================================

/// One consistent view of the field, read under a single lock.
///
/// The geometry fields never change during a session; they are carried
/// along so observers can draw the center line and the rope without
/// holding a reference to the field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSnapshot {
    pub player1_position: f64,
    pub player2_position: f64,
    pub progress: Progress,
    pub winner: Option<Winner>,
    pub center: f64,
    pub width: f64,
    pub height: f64,
}

impl FieldSnapshot {
    #[inline]
    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn position(&self, id: PlayerId) -> f64 {
        match id {
            PlayerId::One => self.player1_position,
            PlayerId::Two => self.player2_position,
        }
    }

    /// Vertical coordinate of the rope (half the field height).
    pub fn rope_y(&self) -> f64 {
        self.height / 2.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
