//=========================================================================
// Field Module
//=========================================================================
//
// The shared rope model: players, the lock-guarded field and the
// read-only snapshots handed to observers.
//
//=========================================================================

//=== Module Declarations =================================================

mod game_field;
mod player;
mod snapshot;

//=== Public API ==========================================================

pub use game_field::{AdvanceReport, GameField};
pub use player::{Player, PlayerId};
pub use snapshot::{FieldSnapshot, Progress, Winner};
