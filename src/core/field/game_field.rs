//=========================================================================
// Game Field
//=========================================================================
//
// Shared simulation state: both players, rope geometry, the published
// progress and the game-over outcome.
//
// Architecture:
// ```text
//   InputDispatcher ──register_pull()──┐
//   (one thread per pull)              │
//                                      ▼
//                            Mutex<FieldState>
//                                      ▲
//   LogicLoop ──advance() / evaluate_winner() / publish_progress()
//   RenderLoop ──snapshot()
// ```
//
// Locking discipline:
// - One mutex guards every mutable field (positions, counters, progress,
//   winner).
// - Each public operation takes the lock once and holds it for the whole
//   operation, so `advance()` is atomic with respect to `register_pull()`
//   and snapshots never tear between the two players.
// - Geometry is immutable after construction and lives outside the lock.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::{FieldSnapshot, Player, PlayerId, Progress, Winner};
use crate::core::config::{GameConfig, ROPE_LENGTH};

//=== AdvanceReport =======================================================

/// Pull counts consumed from each player during one `advance()`.
///
/// A non-zero count moves the player exactly once, however large it is;
/// the count is reported so callers can account for every registered pull.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    pub player1_pulls: u32,
    pub player2_pulls: u32,
}

impl AdvanceReport {
    /// True when neither player had a pending pull.
    pub fn is_idle(&self) -> bool {
        self.player1_pulls == 0 && self.player2_pulls == 0
    }

    pub fn total(&self) -> u64 {
        u64::from(self.player1_pulls) + u64::from(self.player2_pulls)
    }
}

//=== FieldState ==========================================================

/// Everything behind the field lock.
struct FieldState {
    player1: Player,
    player2: Player,
    progress: Progress,
    winner: Option<Winner>,
}

impl FieldState {
    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        match id {
            PlayerId::One => &mut self.player1,
            PlayerId::Two => &mut self.player2,
        }
    }

    fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.player1,
            PlayerId::Two => &self.player2,
        }
    }
}

//=== GameField ===========================================================

/// The rope, its two players and the lock that guards them.
///
/// Shared between threads behind an `Arc`. All methods take `&self`.
///
/// # Examples
///
/// ```
/// use tug_of_war::core::field::{GameField, PlayerId};
///
/// let field = GameField::new(900.0, 1000.0);
/// assert_eq!(field.position(PlayerId::One), 380.0);
/// assert_eq!(field.position(PlayerId::Two), 520.0);
///
/// field.register_pull(PlayerId::One);
/// field.advance();
///
/// assert_eq!(field.position(PlayerId::One), 373.0);
/// assert_eq!(field.position(PlayerId::Two), 513.0);
/// ```
pub struct GameField {
    width: f64,
    height: f64,
    center: f64,
    rope_length: f64,
    pull_distance: f64,
    state: Mutex<FieldState>,
}

impl GameField {
    //--- Construction -----------------------------------------------------

    /// Creates a field with both players at their start marks.
    ///
    /// # Panics
    ///
    /// Panics if `height` is not positive or if `width` cannot hold the
    /// rope (`width < 140`).
    pub fn new(width: f64, height: f64) -> Self {
        assert!(
            width >= ROPE_LENGTH,
            "Field width must hold the rope ({}), got {}",
            ROPE_LENGTH,
            width
        );
        assert!(height > 0.0, "Field height must be positive, got {}", height);

        let center = width / 2.0;
        let rope_length = ROPE_LENGTH;
        let player1 = Player::new(PlayerId::One.name(), center - rope_length / 2.0);
        let player2 = Player::new(PlayerId::Two.name(), center + rope_length / 2.0);
        // Frames before the first logic tick show the start marks (50%).
        let progress = Progress::measure(center, rope_length, player1.position, player2.position);

        debug!(
            "Field created: {}x{}, center {}, players at {} / {}",
            width, height, center, player1.position, player2.position
        );

        Self {
            width,
            height,
            center,
            rope_length,
            pull_distance: GameConfig::pull_distance(),
            state: Mutex::new(FieldState {
                player1,
                player2,
                progress,
                winner: None,
            }),
        }
    }

    /// Creates a field sized by `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.field_width, config.field_height)
    }

    //--- Geometry ---------------------------------------------------------

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn rope_length(&self) -> f64 {
        self.rope_length
    }

    pub fn pull_distance(&self) -> f64 {
        self.pull_distance
    }

    //--- Mutation ---------------------------------------------------------

    /// Records one pull for `player`.
    ///
    /// Returns `false` (and changes nothing) once the game is over.
    ///
    /// # Panics
    ///
    /// Panics if the pending counter would overflow; a logic loop that
    /// stopped draining is a programming error, not a recoverable state.
    pub fn register_pull(&self, player: PlayerId) -> bool {
        let mut state = self.lock();
        if state.winner.is_some() {
            trace!("Pull for {} ignored: game over", player);
            return false;
        }

        let target = state.player_mut(player);
        target.pending_pulls = target
            .pending_pulls
            .checked_add(1)
            .expect("pending pull counter overflowed");
        true
    }

    /// Converts pending pulls into movement. Called once per logic tick.
    ///
    /// Player 1 is resolved first: it steps toward 0 and, while player 2 is
    /// still right of center, drags player 2 one step toward center. Player
    /// 2 is then resolved against the positions player 1 just wrote. Both
    /// counters are reset once consumed. Nothing moves after game over.
    pub fn advance(&self) -> AdvanceReport {
        let mut state = self.lock();
        if state.winner.is_some() {
            return AdvanceReport::default();
        }

        let report = AdvanceReport {
            player1_pulls: state.player1.pending_pulls,
            player2_pulls: state.player2.pending_pulls,
        };

        if report.player1_pulls > 0 {
            state.player1.position = self.clamp(state.player1.position - self.pull_distance);
            if state.player2.position > self.center {
                state.player2.position = self.clamp(state.player2.position - self.pull_distance);
            }
            state.player1.pending_pulls = 0;
        }

        if report.player2_pulls > 0 {
            state.player2.position = self.clamp(state.player2.position + self.pull_distance);
            if state.player1.position < self.center {
                state.player1.position = self.clamp(state.player1.position + self.pull_distance);
            }
            state.player2.pending_pulls = 0;
        }

        if !report.is_idle() {
            trace!(
                "Advanced ({} / {} pulls): positions {} / {}",
                report.player1_pulls,
                report.player2_pulls,
                state.player1.position,
                state.player2.position
            );
        }

        report
    }

    /// Computes the pull percentages from the current positions.
    pub fn measure_progress(&self) -> Progress {
        let state = self.lock();
        Progress::measure(
            self.center,
            self.rope_length,
            state.player1.position,
            state.player2.position,
        )
    }

    /// Stores percentages for display.
    pub fn publish_progress(&self, progress: Progress) {
        self.lock().progress = progress;
    }

    /// Decides the game if a player has been dragged onto the center line.
    ///
    /// Branches are checked in a fixed order and the first match wins:
    /// player 1 at or past center means player 2 won, otherwise player 2 at
    /// or past center means player 1 won. The two are mutually exclusive
    /// only because both players start the same distance from center; a
    /// single tick cannot move both across.
    ///
    /// Once decided, the same winner is returned on every later call.
    pub fn evaluate_winner(&self) -> Option<Winner> {
        let mut state = self.lock();
        if state.winner.is_some() {
            return state.winner;
        }

        let player = if state.player1.position >= self.center {
            Some(PlayerId::Two)
        } else if state.player2.position <= self.center {
            Some(PlayerId::One)
        } else {
            None
        };
        let winner = player.map(|player| Winner { player });

        if let Some(winner) = winner {
            info!("{}", winner);
            state.winner = Some(winner);
        }
        winner
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_game_over(&self) -> bool {
        self.lock().winner.is_some()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.lock().winner
    }

    pub fn position(&self, player: PlayerId) -> f64 {
        self.lock().player(player).position
    }

    pub fn pending_pulls(&self, player: PlayerId) -> u32 {
        self.lock().player(player).pending_pulls
    }

    /// Reads both players, progress and outcome under one lock.
    pub fn snapshot(&self) -> FieldSnapshot {
        let state = self.lock();
        FieldSnapshot {
            player1_position: state.player1.position,
            player2_position: state.player2.position,
            progress: state.progress,
            winner: state.winner,
            center: self.center,
            width: self.width,
            height: self.height,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    // Every write stays inside the field, whatever order pulls land in.
    fn clamp(&self, position: f64) -> f64 {
        position.clamp(0.0, self.width)
    }

    // Writes are single clamped stores; a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, FieldState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
