//=========================================================================
// Player
//=========================================================================
//
// Rope-side entity: a name, a position along the rope axis and a counter
// of pulls not yet applied by the logic loop.
//
// Players are owned by `GameField`; every mutation happens inside the
// field's lock, so this type itself carries no synchronization.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== PlayerId ============================================================

/// Identifies one of the two rope ends.
///
/// Callers name players through this handle instead of borrowing the
/// `Player` out of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// Left end, pulls toward 0.
    One,

    /// Right end, pulls toward the field width.
    Two,
}

impl PlayerId {
    /// Both players, in resolution order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=== Player ==============================================================

/// Plain data holder for one rope end.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    name: String,
    pub(super) position: f64,
    pub(super) pending_pulls: u32,
}

impl Player {
    /// Creates a player at `initial_position` with no pending pulls.
    pub fn new(name: impl Into<String>, initial_position: f64) -> Self {
        Self {
            name: name.into(),
            position: initial_position,
            pending_pulls: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn pending_pulls(&self) -> u32 {
        self.pending_pulls
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
